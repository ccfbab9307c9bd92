use gatekeep_cors::Headers;
use gatekeep_cors::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// True when `Vary` is the only header present.
pub fn only_vary(headers: &Headers) -> bool {
    headers.len() == 1 && header_value(headers, header::VARY) == Some(header::ORIGIN)
}
