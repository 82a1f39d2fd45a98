use crate::RenderableHeader;

/// Shown in place of a header block when the configuration sends nothing.
pub const EMPTY_HEADERS_NOTICE: &str = "No security headers set.";

/// `Name: value` lines in emission order, or [`EMPTY_HEADERS_NOTICE`].
pub fn render_header_block(headers: &[RenderableHeader]) -> String {
    if headers.is_empty() {
        return format!("{EMPTY_HEADERS_NOTICE}\n");
    }

    let mut out = String::new();
    for h in headers {
        out.push_str(&format!("{}: {}\n", h.name, h.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_prints_notice() {
        assert_eq!(render_header_block(&[]), "No security headers set.\n");
    }

    #[test]
    fn keeps_order() {
        let headers = vec![
            RenderableHeader {
                name: "X-Frame-Options".to_string(),
                value: "DENY".to_string(),
            },
            RenderableHeader {
                name: "Content-Security-Policy".to_string(),
                value: "default-src 'self'".to_string(),
            },
        ];
        assert_eq!(
            render_header_block(&headers),
            "X-Frame-Options: DENY\nContent-Security-Policy: default-src 'self'\n"
        );
    }
}
