use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>5}/{len:5} {msg}";

/// Progress bar for one stage, hidden when progress output is off
pub fn stage_bar(len: usize, visible: bool, message: impl Into<String>) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
        bar.set_style(style.progress_chars("##-"));
    }
    bar.set_message(message.into());
    bar
}
