//! tirescrape library
//!
//! Scrapes a single tire product page with headless Chromium (Playwright via
//! Node.js), extracts pricing and size-variant data from the rendered DOM,
//! and persists the result as a pretty-printed JSON document plus a full-page
//! screenshot.
//!
//! # Module Overview
//!
//! - [`browser`] - Headless page capture through the Playwright helper
//! - [`extract`] - DOM extraction passes and string normalization
//! - [`types`] - The output data model
//! - [`config`] - Compiled-in target, selectors, and runtime options
//! - [`output`] - JSON document and failure-log writers
//! - [`scraper`] - The end-to-end pipeline
//!
//! # Example
//!
//! ```no_run
//! use tirescrape_lib::{run_scrape, ScrapeConfig};
//!
//! # async fn example() -> tirescrape_lib::Result<()> {
//! let config = ScrapeConfig::default();
//! let data = run_scrape(&config, None).await?;
//! println!("Scraped {} tire sizes", data.metadata.counts.tire_sizes);
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod scraper;
pub mod types;

pub use browser::{capture_page, PageSnapshot, ProgressCallback, SessionOptions, VariationInput};
pub use config::{
    ScrapeConfig, Viewport, BASE_PRODUCT_ID, DATA_FILE, DEFAULT_NAVIGATION_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT, DEFAULT_SETTLE_DELAY, ERROR_LOG_FILE, PRICE_SELECTORS,
    SCREENSHOT_FILE, TARGET_URL, VARIATION_CONTAINER_SELECTOR,
};
pub use error::{Result, ScrapeError};
pub use output::{write_error_log, write_tire_data};
pub use scraper::run_scrape;
pub use types::{
    AvailableSizes, Counts, Metadata, ProductInfo, RimDiameter, SpecLinks, TireData, TireSize,
};
