//! `application/x-www-form-urlencoded` bodies, as sent by the search form.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Everything but the unreserved set of the WHATWG urlencoded serializer.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Serialize key/value pairs; spaces become `+`.
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, FORM).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Parse a form body into ordered pairs. Invalid UTF-8 is replaced lossily,
/// pairs without `=` get an empty value.
pub fn parse_form(body: &[u8]) -> Vec<(String, String)> {
    let text = String::from_utf8_lossy(body);
    text.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// First value for `key`, if any.
pub fn form_value(body: &[u8], key: &str) -> Option<String> {
    parse_form(body)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

fn decode_component(s: &str) -> String {
    // '+' must be handled before percent decoding so an encoded "%2B" survives.
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_reserved_characters_are_encoded() {
        assert_eq!(
            encode_form(&[("query", "wireless mouse & pad+")]),
            "query=wireless+mouse+%26+pad%2B"
        );
    }

    #[test]
    fn decode_keeps_literal_plus() {
        let pairs = parse_form(b"query=c%2B%2B+books&flag");
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "c++ books".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn form_value_takes_first_match() {
        assert_eq!(form_value(b"a=1&query=x&query=y", "query").as_deref(), Some("x"));
        assert_eq!(form_value(b"a=1", "query"), None);
    }
}
