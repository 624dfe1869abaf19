pub mod ai_providers;
pub mod rate_limiter;
pub mod request_builder;
pub mod response_normalizer;
pub mod url_scanner;
