use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shared by long running steps. Hidden when there is nothing to track.
pub fn progress_bar(len: u64, msg: String) -> ProgressBar {
    if len == 0 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

    bar.set_style(style);
    bar.set_message(msg);

    bar
}
