//! Browser automation module for headless page capture.
//!
//! Captures a rendered product page through Playwright via Node.js: navigate,
//! wait for network idle plus a settle delay, collect the raw DOM attribute
//! bundles the extractors need, and save a full-page screenshot.
//!
//! # Module Structure
//!
//! - [`session`] - Subprocess orchestration and timeouts
//! - [`playwright`] - The inline capture script and availability checks
//! - [`capture`] - Capture payload types and conversion

mod capture;
mod playwright;
mod session;

pub use capture::{PageSnapshot, VariationInput};
pub use session::{capture_page, ProgressCallback, SessionOptions};
