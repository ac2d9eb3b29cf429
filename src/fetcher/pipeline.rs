use crate::fetcher::types::PageResponse;
use bytes::Bytes;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

/// How far into the body we look for a `<meta>` charset declaration.
const SNIFF_WINDOW: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("static regex must compile")
});

// Covers both `<meta charset=..>` and the http-equiv form, which carries
// `charset=` inside its content attribute.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s[^>]*?charset\s*=\s*["']?([^"'\s;/>]+)"#)
        .expect("static regex must compile")
});

pub fn process_response(url_final: Url, content_type: &str, body_bytes: Bytes) -> PageResponse {
    let encoding = detect_encoding(content_type, &body_bytes);
    let body = decode(&body_bytes, encoding);

    PageResponse {
        url_final,
        encoding: encoding.name(),
        body,
    }
}

/// Header charset wins, then a `<meta>` declaration, then chardetng's guess.
fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&HEADER_CHARSET, content_type) {
        return encoding;
    }

    let window = &body[..body.len().min(SNIFF_WINDOW)];
    if let Some(encoding) = label_from(&META_CHARSET, &String::from_utf8_lossy(window)) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, body.len() <= SNIFF_WINDOW);
    detector.guess(None, true)
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?;
    Encoding::for_label(label.as_str().trim().as_bytes())
}

/// Malformed sequences become U+FFFD; the rest of the page stays usable.
fn decode(body: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "body had malformed byte sequences, replaced them"
        );
    }
    decoded.into_owned()
}
