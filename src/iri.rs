//! Term-shape classification.
//!
//! A term can take one of several mutually-exclusive shapes: blank-node
//! label, CURIE, absolute IRI, bracket-wrapped IRI or relative reference,
//! or a bare name consulted against the active context.

/// Whether `s` has the shape of a blank-node label: `^_:[A-Za-z0-9_]+$`.
pub(crate) fn is_blank_node_label(s: &str) -> bool {
    match s.strip_prefix("_:") {
        Some(rest) => !rest.is_empty() && rest.bytes().all(is_label_byte),
        None => false,
    }
}

/// Whether `b` is a valid byte in a blank-node label suffix.
fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Splits `s` on its first `:`, returning `(prefix, rest)`.
///
/// This is the raw syntactic split used by both the CURIE shape and the
/// absolute-IRI shape; callers distinguish the two by inspecting `rest`.
pub(crate) fn split_on_colon(s: &str) -> Option<(&str, &str)> {
    let pos = s.find(':')?;
    Some((&s[..pos], &s[pos + 1..]))
}

/// Whether `prefix` and `reference` are both non-empty runs of word
/// characters, i.e. the CURIE shape `prefix:reference`.
pub(crate) fn is_curie_shape(prefix: &str, reference: &str) -> bool {
    is_word(prefix) && is_word(reference)
}

/// Whether every byte of `s` is a "word" character (`[A-Za-z0-9_]`), and `s`
/// is non-empty.
fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Whether `scheme:rest` is an absolute IRI, i.e. `rest` begins with at
/// least one `/` (an irrelative-ref).
pub(crate) fn is_absolute_iri_rest(rest: &str) -> bool {
    rest.starts_with('/')
}

/// Unwraps a bracket-delimited term `<...>`, returning the inner text.
///
/// Returns `None` if `s` is not of the form `<...>`.
pub(crate) fn unwrap_brackets(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('<')?.strip_suffix('>')?;
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_node_labels() {
        assert!(is_blank_node_label("_:foo"));
        assert!(is_blank_node_label("_:a1_2"));
        assert!(!is_blank_node_label("_:"));
        assert!(!is_blank_node_label("foo"));
        assert!(!is_blank_node_label("_:has space"));
    }

    #[test]
    fn split_colon() {
        assert_eq!(split_on_colon("foaf:name"), Some(("foaf", "name")));
        assert_eq!(split_on_colon("no-colon"), None);
        assert_eq!(
            split_on_colon("http://example.org/x"),
            Some(("http", "//example.org/x"))
        );
    }

    #[test]
    fn curie_shape() {
        assert!(is_curie_shape("foaf", "name"));
        assert!(!is_curie_shape("http", "//example.org/x"));
        assert!(!is_curie_shape("", "name"));
    }

    #[test]
    fn absolute_iri_rest() {
        assert!(is_absolute_iri_rest("//example.org/x"));
        assert!(!is_absolute_iri_rest("name"));
    }

    #[test]
    fn brackets() {
        assert_eq!(
            unwrap_brackets("<http://example.org/x>"),
            Some("http://example.org/x")
        );
        assert_eq!(unwrap_brackets("<foo"), None);
        assert_eq!(unwrap_brackets("foo>"), None);
    }
}
