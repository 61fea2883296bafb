/// Path template of the next-match operation
pub const NEXT_MATCH_PATH: &str = "/match/{seekerId}";

/// Percent-escape a value so it stays a single URL path segment
///
/// Everything outside the RFC 3986 unreserved set is encoded, so `/`
/// becomes `%2F` and a space becomes `%20`.
#[inline]
pub fn escape_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Replace every `{name}` placeholder in `template` with the escaped `value`
pub fn expand_path(template: &str, name: &str, value: &str) -> String {
    let placeholder = format!("{{{}}}", name);
    template.replace(&placeholder, &escape_path_segment(value))
}

/// Path of the next-match operation for a seeker
pub fn next_match_path(seeker_id: &str) -> String {
    expand_path(NEXT_MATCH_PATH, "seekerId", seeker_id)
}
