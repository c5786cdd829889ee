//! HTML page rendering.
//!
//! The page template is compiled into the binary. Every substituted value
//! is HTML-escaped: generated lines contain quotes and apostrophes, and the
//! host shown in the telnet hint comes from the client's `Host` header.

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

/// Values substituted into the index page.
#[derive(Debug, Clone, Copy)]
pub struct IndexPage<'a> {
    pub message: &'a str,
    pub tcp_host: &'a str,
    pub tcp_port: u16,
}

impl IndexPage<'_> {
    /// Fill the `{{slot}}` markers in one pass over the template, so text
    /// substituted from the request is never scanned for further slots.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(INDEX_TEMPLATE.len() + 256);
        let mut rest = INDEX_TEMPLATE;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            match &after[..end] {
                "message" => out.push_str(&escape_html(self.message)),
                "tcp_host" => out.push_str(&escape_html(self.tcp_host)),
                "tcp_port" => out.push_str(&self.tcp_port.to_string()),
                other => {
                    out.push_str("{{");
                    out.push_str(other);
                    out.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip a trailing `:port` from a `Host` header value.
pub fn host_without_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
