use crate::enums::verdict::Verdict;
use crate::structs::analysis_result::AnalysisResult;

pub struct ReportPrinter;

impl ReportPrinter {
    pub fn render(result: &AnalysisResult) -> String {
        let mut out = String::new();

        out.push_str("🔍 URL THREAT REPORT\n");
        out.push_str("====================\n");
        out.push_str(&format!("URL:     {}\n", result.url));
        out.push_str(&format!("Verdict: {} {}\n", result.verdict.emoji(), result.verdict));
        out.push_str(&format!("Score:   {}/100 {}\n", result.safety_score, Self::score_bar(result.safety_score)));

        if !result.summary.is_empty() {
            out.push_str(&format!("\n{}\n", result.summary));
        }

        Self::push_list(&mut out, "\n🚩 RISK FACTORS", &result.risk_factors);
        Self::push_list(&mut out, "\n🛡️ SAFE FACTORS", &result.safe_factors);

        let details = &result.technical_details;
        if !details.is_empty() {
            out.push_str("\n🔧 TECHNICAL DETAILS\n");
            let rows = [
                ("Domain age", &details.domain_age),
                ("Hosting", &details.hosting_provider),
                ("SSL", &details.ssl_status),
            ];
            for (label, value) in rows {
                if let Some(value) = value {
                    out.push_str(&format!("  {}: {}\n", label, value));
                }
            }
        }

        if !result.sources.is_empty() {
            out.push_str("\n📚 SOURCES\n");
            for (i, source) in result.sources.iter().enumerate() {
                out.push_str(&format!("  {}. {} - {}\n", i + 1, source.title, source.uri));
            }
        }

        if result.verdict == Verdict::Unknown {
            out.push_str("\n⚠️ No reliable verdict. Treat this link as unsafe until checked by hand.\n");
        }

        out
    }

    pub fn print(result: &AnalysisResult) {
        println!("{}", Self::render(result));
    }

    fn push_list(out: &mut String, heading: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }

        out.push_str(heading);
        out.push('\n');
        for item in items {
            out.push_str(&format!("  • {}\n", item));
        }
    }

    fn score_bar(score: u8) -> String {
        let filled = usize::from(score / 10);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
    }
}
