//! Compiled-in scrape targets and runtime options.
//!
//! The target page, its selectors, and the output filenames are constants;
//! there is no CLI surface. `ScrapeConfig` exists so tests can point the
//! pipeline at a stub node binary and a temp directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Product page this scraper is built for.
pub const TARGET_URL: &str =
    "https://www.goodyear.com/en_US/tires/assurance-weatherready-2/24987.html";

/// Catalog id of the target page, taken from the URL rather than the DOM.
pub const BASE_PRODUCT_ID: &str = "24987";

/// Price selector candidates, tried in priority order; first match wins.
/// Price markup is unstable across page variants, hence the fallbacks.
pub const PRICE_SELECTORS: &[&str] = &[
    "[data-testid=\"pds-pricing\"]",
    ".product-price",
    ".price-range",
    "[data-qa=\"product-price\"]",
    ".product-sales-price",
    ".price",
];

/// Container holding both the rim-diameter and tire-size radio inputs.
pub const VARIATION_CONTAINER_SELECTOR: &str =
    "div.radio-button-variation.mr-8.mt-8.position-relative";

/// Output filename for the scraped data document.
pub const DATA_FILE: &str = "tire_data.json";

/// Output filename for the full-page screenshot.
pub const SCREENSHOT_FILE: &str = "tire_page.png";

/// Output filename for the failure log.
pub const ERROR_LOG_FILE: &str = "scraping_error.log";

/// Default timeout for page navigation (networkidle).
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Fixed settle delay after network idle, for client-side rendering.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Default timeout for the entire capture subprocess.
pub const DEFAULT_PROCESS_TIMEOUT: Duration = Duration::from_secs(90);

/// Browser viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Runtime options for a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// URL of the product page to scrape.
    pub target_url: String,
    /// Catalog id recorded in the output verbatim.
    pub base_product_id: String,
    /// The Node.js command used to run the capture script.
    pub node_command: String,
    /// Viewport dimensions for the browser.
    pub viewport: Viewport,
    /// Whether to run the browser headless.
    pub headless: bool,
    /// Timeout for page navigation.
    pub navigation_timeout: Duration,
    /// Settle delay after network idle.
    pub settle_delay: Duration,
    /// Timeout for the entire capture subprocess.
    pub process_timeout: Duration,
    /// Where the JSON document is written.
    pub data_path: PathBuf,
    /// Where the full-page screenshot is written.
    pub screenshot_path: PathBuf,
    /// Where the failure log is written.
    pub error_log_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            target_url: TARGET_URL.to_string(),
            base_product_id: BASE_PRODUCT_ID.to_string(),
            node_command: "node".to_string(),
            viewport: Viewport::default(),
            headless: true,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
            process_timeout: DEFAULT_PROCESS_TIMEOUT,
            data_path: PathBuf::from(DATA_FILE),
            screenshot_path: PathBuf::from(SCREENSHOT_FILE),
            error_log_path: PathBuf::from(ERROR_LOG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_match_expected() {
        let cfg = ScrapeConfig::default();

        assert_eq!(cfg.target_url, TARGET_URL);
        assert_eq!(cfg.base_product_id, "24987");
        assert_eq!(cfg.node_command, "node");
        assert!(cfg.headless);
        assert_eq!(cfg.viewport.width, 1280);
        assert_eq!(cfg.viewport.height, 800);
        assert_eq!(cfg.navigation_timeout, Duration::from_secs(60));
        assert_eq!(cfg.settle_delay, Duration::from_secs(5));
        assert_eq!(cfg.process_timeout, Duration::from_secs(90));
        assert_eq!(cfg.data_path, PathBuf::from("tire_data.json"));
        assert_eq!(cfg.screenshot_path, PathBuf::from("tire_page.png"));
        assert_eq!(cfg.error_log_path, PathBuf::from("scraping_error.log"));
    }

    #[test]
    fn price_selectors_keep_priority_order() {
        assert_eq!(PRICE_SELECTORS.first(), Some(&"[data-testid=\"pds-pricing\"]"));
        assert_eq!(PRICE_SELECTORS.last(), Some(&".price"));
        assert_eq!(PRICE_SELECTORS.len(), 6);
    }

    #[test]
    fn base_product_id_matches_target_url() {
        assert!(TARGET_URL.contains(BASE_PRODUCT_ID));
    }
}
