pub const URL_PLACEHOLDER: &str = "{{URL}}";

pub const URL_ANALYSIS_PROMPT: &str = r#"
Analyze this URL for security threats: "{{URL}}"

Perform the following checks:
1. Check for typo-squatting (imitating popular brands).
2. Analyze the Top Level Domain (TLD) reputation.
3. Use Google Search to check if this domain is a known legitimate business or reported as a scam/phishing site.
4. Look for obfuscation techniques in the URL string.

Return the response STRICTLY as a raw JSON object (no markdown formatting, no code blocks) with this structure:
{
  "safetyScore": number (0 is dangerous, 100 is very safe),
  "verdict": "SAFE" | "SUSPICIOUS" | "DANGEROUS",
  "summary": "A concise summary of why this link is safe or dangerous.",
  "riskFactors": ["list", "of", "risks"],
  "safeFactors": ["list", "of", "positive signs"],
  "technicalDetails": {
    "domainAge": "unknown or estimated",
    "hostingProvider": "unknown or inferred",
    "sslStatus": "inferred from protocol"
  }
}
"#;
