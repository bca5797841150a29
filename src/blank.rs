//! Blank-node label synthesis.
//!
//! Values without an explicit subject reference get a freshly generated
//! blank-node label, built the same way the wider ecosystem mints them:
//! a random 128-bit identifier rendered as hex.

use uuid::Uuid;

/// Generates a fresh, globally-unique blank-node label of the form
/// `_:` followed by a 32-character hex UUID (no hyphens).
pub(crate) fn fresh_blank_node() -> String {
    let label = format!("_:{}", Uuid::new_v4().to_simple());
    log::trace!("generated blank node {}", label);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_blank_node_label_shape() {
        let label = fresh_blank_node();
        assert!(crate::iri::is_blank_node_label(&label), "{}", label);
    }

    #[test]
    fn is_unique_across_calls() {
        let a = fresh_blank_node();
        let b = fresh_blank_node();
        assert_ne!(a, b);
    }
}
