//! The `explain` use case: look up scenario and header documentation.

use headerlab_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available scenario IDs and header names.
    NotFound {
        identifier: String,
        available_scenarios: &'static [&'static str],
        available_headers: &'static [&'static str],
    },
}

/// Look up an explanation for a scenario ID or header name.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_scenarios: explain::all_scenario_ids(),
            available_headers: explain::all_header_names(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```http\n");
    if exp.examples.before.is_empty() {
        out.push_str("(header not sent)");
    } else {
        out.push_str(exp.examples.before);
    }
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```http\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, scenarios: &[&str], headers: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown scenario or header: {}\n\n", identifier));
    out.push_str("Available scenarios:\n");
    for id in scenarios {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable headers:\n");
    for name in headers {
        out.push_str(&format!("  - {}\n", name));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_scenario() {
        assert!(matches!(run_explain("clickjacking"), ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_header_any_case() {
        assert!(matches!(
            run_explain("content-security-policy"),
            ExplainOutput::Found(_)
        ));
    }

    #[test]
    fn explain_unknown() {
        match run_explain("csrf") {
            ExplainOutput::NotFound {
                identifier,
                available_scenarios,
                available_headers,
            } => {
                assert_eq!(identifier, "csrf");
                assert_eq!(available_scenarios.len(), 6);
                assert!(available_headers.contains(&"X-Frame-Options"));
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain("X-Frame-Options") else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with("X-Frame-Options\n===============\n"));
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("(header not sent)"));
        assert!(formatted.contains("```http\nX-Frame-Options: DENY\n```"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["cors"], &["Referrer-Policy"]);
        assert!(formatted.contains("Unknown scenario or header: missing"));
        assert!(formatted.contains("Available scenarios:\n  - cors"));
        assert!(formatted.contains("Available headers:\n  - Referrer-Policy"));
    }
}
