//! Term Resolver.
//!
//! Classifies a string as angle-bracketed IRI, absolute IRI, CURIE,
//! blank-node label, relative reference, or context term; returns an
//! absolute IRI or blank-node label.

use iri_string::types::{IriReferenceStr, IriStr};

use crate::{
    context::Context,
    error::{ErrorCode, Result},
    iri::{is_absolute_iri_rest, is_blank_node_label, is_curie_shape, split_on_colon, unwrap_brackets},
};

/// Resolves `term` as a resource (subject, property value interpreted as an
/// IRI, or a reference-classified object value).
///
/// First match wins, tried in the order below.
pub(crate) fn resolve_as_resource(term: &str, context: &Context) -> Result<String> {
    // Step 1: a key bound in the active context always wins.
    if let Some(iri) = context.term(term) {
        return Ok(iri.to_owned());
    }
    // Step 2: blank-node label.
    if is_blank_node_label(term) {
        return Ok(term.to_owned());
    }
    // Step 3: CURIE shape.
    if let Some((prefix, reference)) = split_on_colon(term) {
        if is_curie_shape(prefix, reference) {
            if let Some(base) = context.term(prefix) {
                return Ok(format!("{}{}", base, reference));
            }
            if let Some(bound) = context.term(reference) {
                return Ok(bound.to_owned());
            }
            return Err(ErrorCode::UnboundPrefix.at(term.to_owned()));
        }
    }
    // Step 3b: unwrapped absolute IRI (`scheme:rest` where `rest` begins
    // with `/`), resolving to itself. Guarded against bracket-wrapped
    // terms, which fall through to steps 4/5 instead so the brackets get
    // stripped.
    if !term.starts_with('<') {
        if let Some((_, rest)) = split_on_colon(term) {
            if is_absolute_iri_rest(rest) {
                return Ok(term.to_owned());
            }
        }
    }
    // Step 4: wrapped absolute IRI.
    if let Some(inner) = unwrap_brackets(term) {
        if split_on_colon(inner).is_some() {
            return resolve_wrapped(inner, context);
        }
        // Step 5: wrapped relative reference (no colon in the wrapped text).
        return resolve_relative(inner, context, term);
    }
    // Step 6: no classification succeeded.
    Err(ErrorCode::UnresolvableTerm.at(term.to_owned()))
}

/// Whether `term` has one of the shapes the Value Classifier delegates to
/// the Term Resolver in resource mode: a key bound in the active context,
/// or blank-node, CURIE, wrapped-IRI, or unwrapped-absolute-IRI shape.
///
/// This is a pure shape test, independent of whether resolution would
/// actually succeed — an unbound CURIE prefix still counts as
/// resource-shaped, so that delegating to [`resolve_as_resource`] correctly
/// fails the whole expansion with `UnboundPrefix` rather than silently
/// falling back to a string literal.
pub(crate) fn looks_like_resource_term(term: &str, context: &Context) -> bool {
    if context.term(term).is_some() || is_blank_node_label(term) {
        return true;
    }
    if let Some((prefix, reference)) = split_on_colon(term) {
        if is_curie_shape(prefix, reference) || is_absolute_iri_rest(reference) {
            return true;
        }
    }
    unwrap_brackets(term).is_some()
}

/// Resolves a wrapped-absolute-IRI's inner text, applying `#base` if
/// present (step 4 of "resolve as resource").
fn resolve_wrapped(inner: &str, context: &Context) -> Result<String> {
    match context.base() {
        Some(base) => resolve_against_base(inner, base),
        None => Ok(inner.to_owned()),
    }
}

/// Resolves a wrapped-relative-reference's inner text against `#base`,
/// failing with `MissingBase` if none is in scope (step 5).
fn resolve_relative(inner: &str, context: &Context, original: &str) -> Result<String> {
    match context.base() {
        Some(base) => resolve_against_base(inner, base),
        None => Err(ErrorCode::MissingBase.at(original.to_owned())),
    }
}

/// Joins `reference` against `base` per RFC 3986.
fn resolve_against_base(reference: &str, base: &str) -> Result<String> {
    let base: &IriStr = IriStr::new(base).map_err(|e| {
        ErrorCode::MissingBase
            .and_source(e)
            .context(format!("#base = {:?} is not a valid IRI", base))
    })?;
    let reference: &IriReferenceStr = IriReferenceStr::new(reference).map_err(|e| {
        ErrorCode::MissingBase
            .and_source(e)
            .context(format!("{:?} is not a valid IRI reference", reference))
    })?;
    Ok(reference.resolve_against(base.to_absolute()).to_string())
}

/// Resolves `key` as a property (a JSON key denoting a predicate, or a
/// datatype suffix).
///
/// First match wins, tried in the order below.
pub(crate) fn resolve_as_property(key: &str, context: &Context) -> Result<String> {
    // Step 1: wrapped absolute IRI.
    if let Some(inner) = unwrap_brackets(key) {
        return Ok(inner.to_owned());
    }
    // Step 2: absolute IRI shape (scheme followed by `/...`).
    if let Some((_, rest)) = split_on_colon(key) {
        if is_absolute_iri_rest(rest) {
            return Ok(key.to_owned());
        }
    }
    // Step 3: CURIE shape with a bound prefix.
    if let Some((prefix, reference)) = split_on_colon(key) {
        if is_curie_shape(prefix, reference) {
            if let Some(base) = context.term(prefix) {
                return Ok(format!("{}{}", base, reference));
            }
        }
    }
    // Step 4: blank-node label (tolerated for properties in early drafts).
    if is_blank_node_label(key) {
        return Ok(key.to_owned());
    }
    // Step 5: a key bound in the active context.
    if let Some(iri) = context.term(key) {
        return Ok(iri.to_owned());
    }
    // Step 6: fall back to `#vocab`.
    if let Some(vocab) = context.vocab() {
        return Ok(format!("{}{}", vocab, key));
    }
    // Step 7: no classification succeeded.
    Err(ErrorCode::MissingVocab.at(key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx_with(local: serde_json::Value) -> Context {
        Context::default().merge(local.as_object().unwrap())
    }

    #[test]
    fn resource_bound_key_wins_over_curie_interpretation() {
        // A bound key `foaf:name` is a single term, not a CURIE.
        let context = ctx_with(json!({"foaf:name": "http://example.org/whole-term"}));
        assert_eq!(
            resolve_as_resource("foaf:name", &context).unwrap(),
            "http://example.org/whole-term"
        );
    }

    #[test]
    fn resource_blank_node() {
        let context = Context::default();
        assert_eq!(resolve_as_resource("_:b1", &context).unwrap(), "_:b1");
    }

    #[test]
    fn resource_curie() {
        let context = Context::default();
        assert_eq!(
            resolve_as_resource("foaf:Person", &context).unwrap(),
            "http://xmlns.com/foaf/0.1/Person"
        );
    }

    #[test]
    fn resource_unbound_prefix_fails() {
        let context = Context::empty();
        let err = resolve_as_resource("nope:thing", &context).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnboundPrefix);
    }

    #[test]
    fn resource_unwrapped_absolute_iri_resolves_to_itself() {
        let context = Context::default();
        assert_eq!(
            resolve_as_resource("http://manu.sporny.org/", &context).unwrap(),
            "http://manu.sporny.org/"
        );
    }

    #[test]
    fn resource_shape_detection() {
        let context = Context::default();
        assert!(looks_like_resource_term("foaf:Person", &context));
        assert!(looks_like_resource_term("_:b1", &context));
        assert!(looks_like_resource_term("http://manu.sporny.org/", &context));
        assert!(looks_like_resource_term("<http://example.org/x>", &context));
        assert!(looks_like_resource_term("name", &context));
        assert!(!looks_like_resource_term("just a string", &context));
    }

    #[test]
    fn resource_wrapped_absolute_iri() {
        let context = Context::default();
        assert_eq!(
            resolve_as_resource("<http://example.org/people#john>", &context).unwrap(),
            "http://example.org/people#john"
        );
    }

    #[test]
    fn resource_wrapped_absolute_iri_does_not_keep_its_brackets() {
        // Guards against the unwrapped-absolute-IRI step (3b) misfiring on
        // a bracket-wrapped term before the bracket-stripping step runs.
        let context = Context::empty();
        let resolved = resolve_as_resource("<http://example.org/x>", &context).unwrap();
        assert_eq!(resolved, "http://example.org/x");
        assert!(!resolved.starts_with('<'));
    }

    #[test]
    fn resource_wrapped_relative_reference_requires_base() {
        let context = Context::empty();
        let err = resolve_as_resource("<foo>", &context).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingBase);

        let context = ctx_with(json!({"#base": "http://example.org/"}));
        assert_eq!(
            resolve_as_resource("<foo>", &context).unwrap(),
            "http://example.org/foo"
        );
    }

    #[test]
    fn resource_unresolvable_bare_term() {
        let context = Context::empty();
        let err = resolve_as_resource("nothing-bound", &context).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnresolvableTerm);
    }

    #[test]
    fn property_absolute_iri_shape() {
        let context = Context::empty();
        assert_eq!(
            resolve_as_property("http://manu.sporny.org/", &context).unwrap(),
            "http://manu.sporny.org/"
        );
    }

    #[test]
    fn property_curie() {
        let context = Context::default();
        assert_eq!(
            resolve_as_property("foaf:name", &context).unwrap(),
            "http://xmlns.com/foaf/0.1/name"
        );
    }

    #[test]
    fn property_bare_term_via_default_context() {
        let context = Context::default();
        assert_eq!(
            resolve_as_property("name", &context).unwrap(),
            "http://xmlns.com/foaf/0.1/name"
        );
    }

    #[test]
    fn property_bare_term_via_vocab() {
        let context = ctx_with(json!({"#vocab": "http://example.org/myvocab#"}));
        assert_eq!(
            resolve_as_property("credits", &context).unwrap(),
            "http://example.org/myvocab#credits"
        );
    }

    #[test]
    fn property_missing_vocab_fails() {
        let context = Context::empty();
        let err = resolve_as_property("credits", &context).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingVocab);
    }
}
