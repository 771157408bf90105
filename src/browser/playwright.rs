//! Playwright integration for headless page capture.
//!
//! This module contains the inline Playwright capture script, error mapping,
//! and availability checks for Node.js and Playwright.

use crate::{Result, ScrapeError};
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Playwright script that loads the product page, pulls the raw DOM bundles,
/// and captures a full-page screenshot.
///
/// Emits one JSON object on stdout: `{status, page, screenshotError}` on
/// success, or `{status: "error", message}` on stderr with a non-zero exit.
/// The browser is closed on every exit path by the `finally` block.
pub(crate) const CAPTURE_SCRIPT: &str = r#"
const [, url, width, height, navTimeout, settleDelay, screenshotPath, priceSelectorsJson, containerSelector, headlessFlag] = process.argv;

async function run() {
  let browser;
  try {
    const { chromium } = require('playwright');
    browser = await chromium.launch({ headless: headlessFlag !== '0' });
    const context = await browser.newContext({
      viewport: {
        width: parseInt(width, 10),
        height: parseInt(height, 10)
      }
    });
    const page = await context.newPage();

    await page.goto(url, { waitUntil: 'networkidle', timeout: parseInt(navTimeout, 10) });
    await page.waitForTimeout(parseInt(settleDelay, 10));

    const priceSelectors = JSON.parse(priceSelectorsJson);
    const snapshot = await page.evaluate(({ priceSelectors, containerSelector }) => {
      let priceText = null;
      for (const selector of priceSelectors) {
        const el = document.querySelector(selector);
        if (el) {
          priceText = el.textContent;
          break;
        }
      }

      const headingEl = document.querySelector('h1');

      const collect = (name) => Array.from(
        document.querySelectorAll(`${containerSelector} input[name="${name}"]`)
      ).map((el) => ({
        id: el.id || '',
        value: el.getAttribute('value') || '',
        dataValue: el.getAttribute('data-value') || '',
        dataUrl: el.getAttribute('data-url') || ''
      }));

      return {
        heading: headingEl ? headingEl.textContent : null,
        priceText,
        rimInputs: collect('rimDiameter'),
        tireInputs: collect('tireSizeCode')
      };
    }, { priceSelectors, containerSelector });

    let screenshotError = null;
    if (screenshotPath) {
      try {
        await page.screenshot({ path: screenshotPath, fullPage: true });
      } catch (err) {
        screenshotError = err && err.message ? err.message : String(err);
      }
    }

    console.log(JSON.stringify({ status: 'ok', page: snapshot, screenshotError }));
  } catch (err) {
    const message = err && err.message ? err.message : String(err);
    console.error(JSON.stringify({ status: 'error', message }));
    process.exitCode = 1;
  } finally {
    if (browser) {
      await browser.close();
    }
  }
}

run();
"#;

/// Timeout for checking node/playwright availability.
pub(crate) const NODE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Script to check if Playwright is installed.
const PLAYWRIGHT_CHECK_SCRIPT: &str = "require('playwright'); process.stdout.write('ok');";

/// Error result from the capture script.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ScriptError {
    pub status: String,
    pub message: String,
}

/// Maps a spawn error to an appropriate ScrapeError.
pub(crate) fn map_spawn_error(err: io::Error, command: &str) -> ScrapeError {
    if err.kind() == io::ErrorKind::NotFound {
        ScrapeError::browser(format!(
            "Unable to spawn Playwright helper; '{}' was not found on PATH",
            command
        ))
    } else {
        ScrapeError::Io(err)
    }
}

/// Maps capture-script stderr output to an appropriate ScrapeError.
pub(crate) fn map_playwright_error(status_text: impl Into<String>, stderr: &str) -> ScrapeError {
    if let Ok(error) = serde_json::from_str::<ScriptError>(stderr) {
        return map_playwright_status_error(&error.status, error.message);
    }

    let lower = stderr.to_ascii_lowercase();

    if lower.contains("cannot find module 'playwright'") {
        return ScrapeError::browser(
            "Playwright npm package is missing; install with `npm install playwright`.",
        );
    }

    if lower.contains("timeout") {
        return ScrapeError::browser(
            "Playwright timed out; ensure the product page finishes loading within the navigation timeout.",
        );
    }

    ScrapeError::browser(format!(
        "Playwright exited with status {}: {}",
        status_text.into(),
        stderr.trim()
    ))
}

/// Maps a capture-script status error to an appropriate ScrapeError.
pub(crate) fn map_playwright_status_error(status: &str, message: String) -> ScrapeError {
    if message
        .to_ascii_lowercase()
        .contains("cannot find module 'playwright'")
    {
        ScrapeError::browser(
            "Playwright npm package is missing; install with `npm install playwright`.",
        )
    } else if message.to_ascii_lowercase().contains("timeout") {
        ScrapeError::browser(format!(
            "Playwright error (status {}): {}. Hint: the page did not reach network idle within the navigation timeout.",
            status, message
        ))
    } else {
        ScrapeError::browser(format!("Playwright error (status {}): {}", status, message))
    }
}

/// Ensures Node.js is available on the system.
pub(crate) async fn ensure_node_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.status())
        .await
        .map_err(|_| {
            ScrapeError::browser(format!(
                "Timed out checking node availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !status.success() {
        return Err(ScrapeError::browser(format!(
            "Node command {:?} is not available (exit {})",
            node_command, status
        )));
    }

    Ok(())
}

/// Ensures the Playwright npm package is installed.
pub(crate) async fn ensure_playwright_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("-e")
        .arg(PLAYWRIGHT_CHECK_SCRIPT)
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let output = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.output())
        .await
        .map_err(|_| {
            ScrapeError::browser(format!(
                "Timed out checking Playwright availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(map_playwright_error(
            format!("{:?}", output.status),
            &stderr,
        ));
    }

    Ok(())
}
