//! Capture session orchestration.
//!
//! Spawns the Node.js Playwright helper, bounds it with a process timeout,
//! and parses the JSON payload it prints on stdout. The browser itself lives
//! inside the subprocess; its `finally` block closes it on every exit path,
//! and the Rust side kills the child when the process timeout expires.

use crate::config::Viewport;
use crate::{Result, ScrapeError};
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

use super::capture::{convert_raw_page, PageSnapshot, RawCaptureResult};
use super::playwright::{
    ensure_node_available, ensure_playwright_available, map_playwright_error,
    map_playwright_status_error, map_spawn_error, ScriptError, CAPTURE_SCRIPT,
};

/// Optional progress logger threaded through the session.
pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Options for a single page capture.
#[derive(Clone)]
pub struct SessionOptions {
    /// The Node.js command to use (default: "node").
    pub node_command: String,
    /// Viewport dimensions for the browser.
    pub viewport: Viewport,
    /// Whether to run in headless mode.
    pub headless: bool,
    /// Timeout for page navigation.
    pub navigation_timeout: Duration,
    /// Settle delay after network idle, for client-side rendering.
    pub settle_delay: Duration,
    /// Timeout for the entire capture subprocess.
    pub process_timeout: Duration,
    /// Optional progress callback for logging.
    pub progress: Option<ProgressCallback>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            viewport: Viewport::default(),
            headless: true,
            navigation_timeout: crate::config::DEFAULT_NAVIGATION_TIMEOUT,
            settle_delay: crate::config::DEFAULT_SETTLE_DELAY,
            process_timeout: crate::config::DEFAULT_PROCESS_TIMEOUT,
            progress: None,
        }
    }
}

fn log_progress(progress: &Option<ProgressCallback>, message: &str) {
    if let Some(cb) = progress {
        cb(message);
    }
}

/// Loads the product page and returns its snapshot.
///
/// Navigates to `url`, waits for network idle plus the settle delay, runs the
/// three DOM collection passes in page context, and captures a full-page
/// screenshot to `screenshot_path`. A screenshot failure does not fail the
/// capture; it is reported in [`PageSnapshot::screenshot_error`].
pub async fn capture_page(
    url: &str,
    price_selectors: &[&str],
    container_selector: &str,
    screenshot_path: &Path,
    options: &SessionOptions,
) -> Result<PageSnapshot> {
    let progress = options.progress.clone();
    log_progress(
        &progress,
        &format!(
            "Launching headless browser for {} ({}x{}, nav {}s, settle {}s)…",
            url,
            options.viewport.width,
            options.viewport.height,
            options.navigation_timeout.as_secs(),
            options.settle_delay.as_secs()
        ),
    );
    ensure_node_available(&options.node_command).await?;
    ensure_playwright_available(&options.node_command).await?;

    let price_selectors_json = serde_json::to_string(price_selectors)?;

    let mut cmd = Command::new(&options.node_command);
    cmd.arg("-e")
        .arg(CAPTURE_SCRIPT)
        .arg(url)
        .arg(options.viewport.width.to_string())
        .arg(options.viewport.height.to_string())
        .arg(options.navigation_timeout.as_millis().to_string())
        .arg(options.settle_delay.as_millis().to_string())
        .arg(screenshot_path.to_string_lossy().to_string())
        .arg(price_selectors_json)
        .arg(container_selector)
        .arg(if options.headless { "1" } else { "0" })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    log_progress(&progress, "Navigating and waiting for network idle…");
    let start = Instant::now();
    let mut child = cmd
        .spawn()
        .map_err(|err| map_spawn_error(err, &options.node_command))?;

    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut out) = stdout_pipe {
            let _ = out.read_to_end(&mut buf).await;
        }
        buf
    });

    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut err) = stderr_pipe {
            let _ = err.read_to_end(&mut buf).await;
        }
        buf
    });

    let status = match timeout(options.process_timeout, child.wait()).await {
        Ok(Ok(status)) => status,
        Ok(Err(err)) => return Err(ScrapeError::Io(err)),
        Err(_) => {
            let _ = child.kill().await;
            let _ = child.wait().await;
            log_progress(
                &progress,
                "Capture timed out; browser process killed after exceeding timeout.",
            );
            return Err(ScrapeError::browser(format!(
                "Capture timed out after {:?}",
                options.process_timeout
            )));
        }
    };

    let stdout = stdout_task.await.unwrap_or_else(|_| Vec::new());
    let stderr = stderr_task.await.unwrap_or_else(|_| Vec::new());

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr);
        return Err(map_playwright_error(status.to_string(), &stderr));
    }

    let stdout = String::from_utf8_lossy(&stdout);
    let result: RawCaptureResult = serde_json::from_str(&stdout).map_err(|e| {
        ScrapeError::browser(format!(
            "Failed to parse capture output: {} - raw: {}",
            e,
            stdout.trim()
        ))
    })?;

    if result.status != "ok" {
        if let Ok(err) = serde_json::from_str::<ScriptError>(&stdout) {
            return Err(map_playwright_status_error(&err.status, err.message));
        }
        return Err(ScrapeError::browser(format!(
            "Capture script returned non-ok status: {}",
            result.status
        )));
    }

    let page = result
        .page
        .ok_or_else(|| ScrapeError::browser("Capture script returned ok status but no page data"))?;

    log_progress(
        &progress,
        &format!("Capture finished in {:.1}s", start.elapsed().as_secs_f32()),
    );

    Ok(convert_raw_page(page, result.screenshot_error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_options_default_values() {
        let opts = SessionOptions::default();
        assert_eq!(opts.node_command, "node");
        assert!(opts.headless);
        assert_eq!(opts.viewport.width, 1280);
        assert_eq!(opts.viewport.height, 800);
        assert_eq!(opts.navigation_timeout, Duration::from_secs(60));
        assert_eq!(opts.settle_delay, Duration::from_secs(5));
        assert_eq!(opts.process_timeout, Duration::from_secs(90));
        assert!(opts.progress.is_none());
    }

    #[tokio::test]
    async fn capture_page_checks_node() {
        let options = SessionOptions {
            node_command: "definitely-not-a-binary".to_string(),
            ..SessionOptions::default()
        };

        let result = capture_page(
            "https://example.com",
            &[".price"],
            "div.variations",
            Path::new("tmp.png"),
            &options,
        )
        .await;

        assert!(result.is_err());
    }
}
