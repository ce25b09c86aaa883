use url::Url;

/// Returns `true` iff `candidate` parses as an absolute URL.
///
/// Any scheme is accepted, as with a browser's URL parser. Plain text,
/// relative paths and malformed input return `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}
