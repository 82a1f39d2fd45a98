use headerlab_types::{ContentTypeOptions, HeaderConfig, MimeRisk, MimeSniffingOutcome};

pub fn run(cfg: &HeaderConfig) -> MimeSniffingOutcome {
    match cfg.x_content_type_options {
        Some(ContentTypeOptions::NoSniff) => MimeSniffingOutcome {
            risk: MimeRisk::Low,
            reason: "Prevented by X-Content-Type-Options: nosniff.".to_string(),
        },
        None => MimeSniffingOutcome {
            risk: MimeRisk::High,
            reason: "Browser may mime-sniff content.".to_string(),
        },
    }
}
