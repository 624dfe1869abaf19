pub mod url_analysis_prompt;
