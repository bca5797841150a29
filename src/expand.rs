//! Expansion Walker.
//!
//! Recursively traverses the parsed JSON tree, threading the active
//! context and current subject, producing the triple stream.

use std::collections::VecDeque;

use serde_json::{Map as JsonMap, Value};

use crate::{
    blank::fresh_blank_node,
    context::Context,
    error::{Error, ErrorCode, Result},
    resolve::{resolve_as_property, resolve_as_resource},
    triple::{Object, Subject, Triple},
    value::{classify_scalar, Classified},
};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const CONTEXT_KEY: &str = "#";
const SUBJECT_KEY: &str = "@";
const TYPE_SHORTHAND: &str = "a";

/// Expands `document` under the default active context.
pub fn expand(document: &Value) -> Expander<'_> {
    expand_with_context(document, Context::default())
}

/// Expands `document` under a caller-supplied active context.
pub fn expand_with_context(document: &Value, context: Context) -> Expander<'_> {
    Expander {
        document,
        context: Some(context),
        triples: VecDeque::new(),
        error: None,
        started: false,
    }
}

/// A lazy stream of [`Triple`]s. The underlying traversal runs on the first
/// call to `next`, not at construction; failures surface as a single
/// terminal `Err` item, after which the iterator is exhausted.
pub struct Expander<'a> {
    document: &'a Value,
    context: Option<Context>,
    triples: VecDeque<Triple>,
    error: Option<Error>,
    started: bool,
}

impl<'a> Iterator for Expander<'a> {
    type Item = Result<Triple>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            let context = self.context.take().expect("context consumed once");
            match expand_document(self.document, &context) {
                Ok(triples) => {
                    log::debug!("expansion produced {} triples", triples.len());
                    self.triples = triples.into();
                }
                Err(err) => {
                    log::warn!("expansion aborted: {}", err);
                    self.error = Some(err);
                }
            }
        }
        if let Some(triple) = self.triples.pop_front() {
            return Some(Ok(triple));
        }
        self.error.take().map(Err)
    }
}

/// Turns a resolved IRI or blank-node label string into a [`Subject`].
fn as_subject(resolved: String) -> Subject {
    if resolved.starts_with("_:") {
        Subject::Blank(resolved)
    } else {
        Subject::Iri(resolved)
    }
}

fn classified_to_object(classified: Classified) -> Object {
    match classified {
        Classified::Resource(resolved) => Object::Resource(as_subject(resolved)),
        Classified::Literal {
            lexical_form,
            datatype,
            language,
        } => Object::Literal {
            lexical_form,
            datatype,
            language,
        },
    }
}

/// Expands a value the way the top level of a traversal would: an array
/// recurses element-wise, an object expands to its own triple set, and any
/// bare scalar or null produces nothing (rule 1/2 of the traversal rules).
fn expand_document(value: &Value, context: &Context) -> Result<Vec<Triple>> {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(Vec::new()),
        Value::Array(items) => {
            let mut triples = Vec::new();
            for item in items {
                triples.extend(expand_document(item, context)?);
            }
            Ok(triples)
        }
        Value::Object(object) => Ok(expand_object(object, context)?.0),
    }
}

/// Expands one JSON object, returning its triples and its own subject.
fn expand_object(object: &JsonMap<String, Value>, context: &Context) -> Result<(Vec<Triple>, Subject)> {
    let local_context = match object.get(CONTEXT_KEY) {
        Some(local) => context.merge_value(local),
        None => context.clone(),
    };

    let mut triples = Vec::new();
    let subject = determine_subject(object.get(SUBJECT_KEY), &local_context, &mut triples)?;

    for (key, value) in object {
        if key == CONTEXT_KEY || key == SUBJECT_KEY {
            continue;
        }
        let property = if key == TYPE_SHORTHAND {
            RDF_TYPE.to_owned()
        } else {
            resolve_as_property(key, &local_context)?
        };
        expand_property_value(&subject, &property, value, &local_context, &mut triples)?;
    }

    Ok((triples, subject))
}

/// Determines the subject of an object given its (already context-merged)
/// `@` entry, recursing as needed and appending any triples produced along
/// the way.
fn determine_subject(
    reference: Option<&Value>,
    context: &Context,
    triples: &mut Vec<Triple>,
) -> Result<Subject> {
    match reference {
        None | Some(Value::Null) => Ok(Subject::Blank(fresh_blank_node())),
        Some(Value::String(s)) => Ok(as_subject(resolve_as_resource(s, context)?)),
        Some(Value::Object(inner)) => {
            let (inner_triples, inner_subject) = expand_object(inner, context)?;
            triples.extend(inner_triples);
            Ok(inner_subject)
        }
        Some(Value::Array(items)) => {
            // Each element is independently expanded under the merged
            // context; the enclosing object gets its own fresh subject and
            // no triple links it to the array's elements.
            for item in items {
                triples.extend(expand_document(item, context)?);
            }
            Ok(Subject::Blank(fresh_blank_node()))
        }
        Some(other) => Err(ErrorCode::MalformedInput
            .at(other.to_string())
            .context("`@` must be a string, object, array, or null")),
    }
}

/// Expands one property's value, appending the resulting triples (and, for
/// object/array-nested cases, any triples the nested values themselves
/// produce) to `triples`.
fn expand_property_value(
    subject: &Subject,
    property: &str,
    value: &Value,
    context: &Context,
    triples: &mut Vec<Triple>,
) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let classified = classify_scalar(value, context)?;
            triples.push(Triple {
                subject: subject.clone(),
                property: property.to_owned(),
                object: classified_to_object(classified),
            });
            Ok(())
        }
        Value::Object(inner) => {
            let (inner_triples, inner_subject) = expand_object(inner, context)?;
            triples.extend(inner_triples);
            triples.push(Triple {
                subject: subject.clone(),
                property: property.to_owned(),
                object: Object::Resource(inner_subject),
            });
            Ok(())
        }
        Value::Array(items) => {
            for element in items {
                match element {
                    Value::Null => {}
                    Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                        let classified = classify_scalar(element, context)?;
                        triples.push(Triple {
                            subject: subject.clone(),
                            property: property.to_owned(),
                            object: classified_to_object(classified),
                        });
                    }
                    Value::Object(inner) => {
                        let (inner_triples, inner_subject) = expand_object(inner, context)?;
                        triples.extend(inner_triples);
                        triples.push(Triple {
                            subject: subject.clone(),
                            property: property.to_owned(),
                            object: Object::Resource(inner_subject),
                        });
                    }
                    Value::Array(_) => {
                        // Nested arrays flatten with no linking triple.
                        triples.extend(expand_document(element, context)?);
                    }
                }
            }
            Ok(())
        }
    }
}
