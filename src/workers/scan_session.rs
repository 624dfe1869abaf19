use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use futures::future;
use crate::enums::scan_outcome::ScanOutcome;
use crate::errors::{LinkscanError, LinkscanResult};
use crate::services::url_scanner::UrlScanner;
use crate::structs::analysis_result::AnalysisResult;

/// Holds the result of the latest scan and allows one scan at a time.
pub struct ScanSession {
    scanner: UrlScanner,
    min_display: Duration,
    busy: AtomicBool,
    current: Mutex<Option<AnalysisResult>>,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ScanSession {
    pub fn new(scanner: UrlScanner, min_display: Duration) -> Self {
        Self {
            scanner,
            min_display,
            busy: AtomicBool::new(false),
            current: Mutex::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn current(&self) -> Option<AnalysisResult> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Scans `url` and waits at least `min_display` before returning, so fast
    /// answers are not shown before the progress indicator has registered.
    pub async fn submit(&self, url: &str) -> LinkscanResult<ScanOutcome> {
        let url = url.trim();
        if url.is_empty() {
            return Err(LinkscanError::user_input_error(url, "a URL to scan", "pass the link you want to check"));
        }

        if self.busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            return Err(LinkscanError::user_input_error(
                url,
                "no scan already in progress",
                "wait for the current scan to finish",
            ));
        }
        let _guard = BusyGuard(&self.busy);

        self.replace_current(None);

        let (outcome, ()) = future::join(self.scanner.scan(url), tokio::time::sleep(self.min_display)).await;

        self.replace_current(Some(outcome.clone().into_analysis_result()));
        Ok(outcome)
    }

    fn replace_current(&self, result: Option<AnalysisResult>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = result;
    }
}
