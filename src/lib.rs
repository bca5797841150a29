//! An early-draft JSON-LD to RDF triple expansion engine.
//!
//! [`expand`] consumes a parsed [`serde_json::Value`] document and produces
//! a lazy stream of [`Triple`]s. The reserved keys recognized on the wire
//! are `#` (local context), `@` (subject reference), and `a` (shorthand for
//! `rdf:type`) — an earlier draft of the JSON-LD processing model than the
//! `@context`/`@id`/`@type` keys used today.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use self::{
    context::Context,
    error::{Error, ErrorCode, Result},
    expand::{expand, expand_with_context, Expander},
    triple::{Object, Subject, Triple},
};

pub(crate) mod blank;
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod expand;
pub(crate) mod iri;
pub(crate) mod resolve;
pub(crate) mod triple;
pub(crate) mod value;
