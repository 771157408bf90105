use std::process::ExitCode;
use std::sync::Arc;

use tirescrape_lib::{run_scrape, write_error_log, ProgressCallback, ScrapeConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ScrapeConfig::default();
    let progress: ProgressCallback = Arc::new(|msg: &str| eprintln!("{msg}"));

    match run_scrape(&config, Some(progress)).await {
        Ok(data) => {
            eprintln!("Data saved to {}", config.data_path.display());
            eprintln!(
                "Full page screenshot saved as {}",
                config.screenshot_path.display()
            );
            eprintln!(
                "Scraped {} rim diameters and {} tire sizes",
                data.metadata.counts.rim_diameters, data.metadata.counts.tire_sizes
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("An error occurred: {err}");
            if let Err(log_err) = write_error_log(&err.to_string(), &config.error_log_path) {
                eprintln!("Failed to write {}: {log_err}", config.error_log_path.display());
            }
            ExitCode::FAILURE
        }
    }
}
