mod support;

mod gemini_http;
mod scan_pipeline;
