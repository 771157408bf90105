//! The scrape pipeline: navigate, extract, assemble, persist.

use crate::browser::{capture_page, ProgressCallback, SessionOptions};
use crate::config::{ScrapeConfig, PRICE_SELECTORS, VARIATION_CONTAINER_SELECTOR};
use crate::types::TireData;
use crate::{extract, output, Result, ScrapeError};
use chrono::Utc;

/// Runs one scrape: loads the target page, runs the three extraction passes,
/// writes `tire_data.json`, and reports the screenshot outcome.
///
/// The screenshot and the data file are independent side effects: a failed
/// screenshot still leaves the data file written, and the run is then
/// reported failed so the caller can log it.
pub async fn run_scrape(
    config: &ScrapeConfig,
    progress: Option<ProgressCallback>,
) -> Result<TireData> {
    let options = SessionOptions {
        node_command: config.node_command.clone(),
        viewport: config.viewport,
        headless: config.headless,
        navigation_timeout: config.navigation_timeout,
        settle_delay: config.settle_delay,
        process_timeout: config.process_timeout,
        progress,
    };

    let snapshot = capture_page(
        &config.target_url,
        PRICE_SELECTORS,
        VARIATION_CONTAINER_SELECTOR,
        &config.screenshot_path,
        &options,
    )
    .await?;

    let product_info = extract::product_info(&snapshot, &config.base_product_id);
    let available_sizes = extract::available_sizes(&snapshot);

    let timezone = iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string());
    let data = TireData::new(
        product_info,
        available_sizes,
        &config.target_url,
        Utc::now(),
        timezone,
    );

    output::write_tire_data(&data, &config.data_path)?;

    if let Some(message) = snapshot.screenshot_error {
        return Err(ScrapeError::Screenshot(message));
    }

    Ok(data)
}
