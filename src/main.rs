use anyhow::{Context, Result};
use sen12mscr_prep::{Pipeline, PrepConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PrepConfig::default();
    let root = config.root.clone();
    let report = Pipeline::new(config)
        .run()
        .with_context(|| format!("Failed to prepare dataset in {}", root.display()))?;

    println!(
        "Done: {} files flattened, {} renamed, {} routed, {} empty folders removed",
        report.flattened.files, report.renamed.files, report.routed.files, report.pruned.folders
    );
    println!(
        "Manifest {}: {} train, {} val, {} test",
        report.manifest.path.display(),
        report.manifest.train,
        report.manifest.validation,
        report.manifest.test
    );
    Ok(())
}
