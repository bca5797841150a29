//! Context Engine.
//!
//! Holds a default context and merges a local context into an active
//! context per scope.

use std::collections::HashMap;

use serde_json::{Map as JsonMap, Value};

/// The reserved key holding the default vocabulary IRI.
const VOCAB_KEY: &str = "#vocab";
/// The earlier spelling of [`VOCAB_KEY`], still accepted on input.
const VOCAB_KEY_LEGACY: &str = "__vocab__";
/// The reserved key holding the base IRI for relative references.
const BASE_KEY: &str = "#base";

/// An active context: a mapping from prefix/term names to expansion IRIs,
/// plus the two reserved `#vocab` / `#base` bindings.
///
/// Context is immutable once entered into a scope; [`Context::merge`]
/// produces a new context rather than mutating `self` or its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Prefix/term name to IRI bindings.
    terms: HashMap<String, String>,
    /// Default vocabulary IRI, prepended to unresolvable bare terms.
    vocab: Option<String>,
    /// Base IRI for resolving wrapped relative references.
    base: Option<String>,
}

impl Context {
    /// Creates a new, empty context: no term bindings, no vocab, no base.
    pub fn empty() -> Self {
        Self {
            terms: HashMap::new(),
            vocab: None,
            base: None,
        }
    }

    /// Looks up a term binding.
    pub(crate) fn term(&self, name: &str) -> Option<&str> {
        self.terms.get(name).map(String::as_str)
    }

    /// Returns the default vocabulary IRI, if bound.
    pub(crate) fn vocab(&self) -> Option<&str> {
        self.vocab.as_deref()
    }

    /// Returns the base IRI, if bound.
    pub(crate) fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Runs the merge operation: given `self` as the active context and
    /// `local` as a local context object, produces a new context `M` such
    /// that `M[k] = local[k]` if `k` is in `local`, else `M[k] = self[k]`.
    ///
    /// Total and deterministic; neither `self` nor `local` is mutated.
    pub fn merge(&self, local: &JsonMap<String, Value>) -> Self {
        let mut terms = self.terms.clone();
        let mut vocab = self.vocab.clone();
        let mut base = self.base.clone();

        for (key, value) in local {
            match key.as_str() {
                VOCAB_KEY | VOCAB_KEY_LEGACY => {
                    vocab = value.as_str().map(str::to_owned);
                }
                BASE_KEY => {
                    base = value.as_str().map(str::to_owned);
                }
                _ => {
                    if let Some(iri) = value.as_str() {
                        terms.insert(key.clone(), iri.to_owned());
                    }
                }
            }
        }

        Self { terms, vocab, base }
    }

    /// Runs [`Context::merge`] against the value of a document's `#` entry,
    /// which may itself be `null`, in which case the context is unchanged.
    pub(crate) fn merge_value(&self, local: &Value) -> Self {
        match local.as_object() {
            Some(object) => self.merge(object),
            None => self.clone(),
        }
    }
}

impl Default for Context {
    /// The fixed seed set reproduced verbatim from the external contract:
    /// widely used prefix bindings plus the common FOAF terms and a
    /// `#vocab` default.
    fn default() -> Self {
        let mut terms = HashMap::new();
        terms.insert(
            "rdf".to_owned(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#".to_owned(),
        );
        terms.insert(
            "xsd".to_owned(),
            "http://www.w3.org/2001/XMLSchema#".to_owned(),
        );
        terms.insert("dc".to_owned(), "http://purl.org/dc/terms/".to_owned());
        terms.insert(
            "skos".to_owned(),
            "http://www.w3.org/2004/02/skos/core#".to_owned(),
        );
        terms.insert(
            "foaf".to_owned(),
            "http://xmlns.com/foaf/0.1/".to_owned(),
        );
        terms.insert("sioc".to_owned(), "http://rdfs.org/sioc/ns#".to_owned());
        terms.insert(
            "cc".to_owned(),
            "http://creativecommons.org/ns#".to_owned(),
        );
        terms.insert(
            "geo".to_owned(),
            "http://www.w3.org/2003/01/geo/wgs84_pos#".to_owned(),
        );
        terms.insert(
            "vcard".to_owned(),
            "http://www.w3.org/2006/vcard/ns#".to_owned(),
        );
        terms.insert(
            "cal".to_owned(),
            "http://www.w3.org/2002/12/cal/ical#".to_owned(),
        );
        terms.insert("doap".to_owned(), "http://usefulinc.com/ns/doap#".to_owned());
        terms.insert(
            "Person".to_owned(),
            "http://xmlns.com/foaf/0.1/Person".to_owned(),
        );
        terms.insert(
            "name".to_owned(),
            "http://xmlns.com/foaf/0.1/name".to_owned(),
        );
        terms.insert(
            "homepage".to_owned(),
            "http://xmlns.com/foaf/0.1/homepage".to_owned(),
        );

        Self {
            terms,
            vocab: Some("http://example.org/default-vocab#".to_owned()),
            base: None,
        }
    }
}
