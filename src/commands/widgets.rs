use crate::core::{error::Result, gauge, print_section_header, progress_bar, spinner};
use std::time::Duration;

const SPINNER_DURATION: Duration = Duration::from_secs(2);
const PROGRESS_STEP: Duration = Duration::from_millis(20);
const PROGRESS_WIDTH: usize = 20;

pub async fn execute_widgets() -> Result<()> {
    print_section_header("Widgets");
    show_spinner().await?;
    show_gauges();
    show_progress_bar().await?;
    Ok(())
}

async fn show_spinner() -> Result<()> {
    let status = spinner("Authenticating you, please wait...")?;
    tokio::time::sleep(SPINNER_DURATION).await;
    status.finish_and_clear();
    Ok(())
}

fn show_gauges() {
    println!("{}", gauge(75.0, 100.0, 20, 80.0, "75% [OK]"));
    println!("{}", gauge(90.0, 100.0, 20, 80.0, "90% [DANGER]"));
}

/// 0% to 100% in roughly two seconds
async fn show_progress_bar() -> Result<()> {
    let bar = progress_bar(PROGRESS_WIDTH)?;
    for position in 0..=100 {
        bar.set_position(position);
        tokio::time::sleep(PROGRESS_STEP).await;
    }
    bar.finish();
    println!();
    Ok(())
}
