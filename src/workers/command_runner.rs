use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use reqwest::Url;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{sleep_duration_millis, timeout_duration};
use crate::enums::commands::Commands;
use crate::errors::{LinkscanError, LinkscanResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::url_scanner::UrlScanner;
use crate::structs::config::config::Config;
use crate::structs::scan_report::ScanReport;
use crate::workers::scan_session::ScanSession;

pub struct ScanOptions {
    pub json: bool,
    pub no_delay: bool,
    pub timeout: Option<u64>,
    pub model: Option<String>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> LinkscanResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Scan { urls, json, no_delay, timeout, model } => {
                self.scan_command(urls, ScanOptions { json, no_delay, timeout, model }).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> LinkscanResult<()> {
        log::info!("🚀 Initializing linkscan configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to change the model or timeouts.", path.display());
        log::info!("🔧 Run 'linkscan validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> LinkscanResult<()> {
        let config = ConfigManager::load()?;
        Self::check_config(&config)?;
        ConfigManager::resolve_api_key(&config.ai)?;

        log::info!("✅ Configuration is valid (model: {})", config.ai.model);
        Ok(())
    }

    async fn scan_command(&self, urls: Vec<String>, options: ScanOptions) -> LinkscanResult<()> {
        for url in &urls {
            Self::validate_url(url)?;
        }

        let mut config = ConfigManager::load()?;
        if let Some(model) = options.model {
            config.ai.model = model;
        }
        if let Some(timeout) = options.timeout {
            config.scan.timeout_secs = timeout;
        }
        Self::check_config(&config)?;

        let api_key = ConfigManager::resolve_api_key(&config.ai)?;
        let session = Self::build_session(&config, api_key, options.no_delay);

        for url in urls {
            let mut spinner = (!options.json).then(|| AnimatedLogger::new(format!("Scanning {}", url)));
            if let Some(spinner) = spinner.as_mut() {
                spinner.start();
            }

            let scanned_at = Utc::now();
            let started = Instant::now();
            let outcome = session.submit(&url).await?;
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some(spinner) = spinner.as_mut() {
                if outcome.is_completed() {
                    spinner.stop("Analysis complete").await;
                } else {
                    spinner.error("Analysis failed").await;
                }
            }

            if options.json {
                let report = ScanReport::new(outcome, scanned_at, duration_ms);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                ReportPrinter::print(&outcome.into_analysis_result());
            }
        }

        Ok(())
    }

    pub fn build_session(config: &Config, api_key: String, no_delay: bool) -> ScanSession {
        let provider = GeminiProvider::from_config(&config.ai, api_key);
        let scanner = UrlScanner::new(Arc::new(provider))
            .with_temperature(config.ai.temperature)
            .with_timeout(timeout_duration(config.scan.timeout_secs));
        let min_display = if no_delay { 0 } else { config.scan.min_display_ms };

        ScanSession::new(scanner, sleep_duration_millis(min_display))
    }

    fn check_config(config: &Config) -> LinkscanResult<()> {
        ConfigManager::validate_config(config).map_err(|errors| LinkscanError::MultipleErrors {
            errors,
            context: "configuration validation".to_string(),
        })
    }

    /// The same gate a browser URL input applies: absolute http(s) URL with a host.
    pub fn validate_url(url: &str) -> LinkscanResult<()> {
        let invalid = || {
            LinkscanError::user_input_error(
                url,
                "an absolute http(s) URL",
                "include the scheme, e.g. https://example.com",
            )
        };

        let parsed = Url::parse(url.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
