//! The RDF triple model the Expansion Walker emits.

use std::fmt;

/// A triple's subject: an IRI or a blank-node label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// An absolute IRI.
    Iri(String),
    /// A blank-node label, including its `_:` prefix.
    Blank(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{}>", iri),
            Self::Blank(label) => f.write_str(label),
        }
    }
}

/// A triple's object: a resource reference or a typed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A reference to another resource.
    Resource(Subject),
    /// A typed literal, optionally carrying a language tag.
    Literal {
        /// The lexical form, already unescaped.
        lexical_form: String,
        /// The datatype IRI.
        datatype: String,
        /// The BCP-47-shaped language tag, present only for `xsd:string`.
        language: Option<String>,
    },
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(subject) => subject.fmt(f),
            Self::Literal {
                lexical_form,
                language: Some(language),
                ..
            } => write!(f, "{:?}@{}", lexical_form, language),
            Self::Literal {
                lexical_form,
                datatype,
                language: None,
            } => write!(f, "{:?}^^<{}>", lexical_form, datatype),
        }
    }
}

/// One emitted RDF statement: subject, property (always an absolute IRI),
/// and object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// The subject.
    pub subject: Subject,
    /// The property IRI.
    pub property: String,
    /// The object.
    pub object: Object,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.property, self.object)
    }
}
