//! Value Classifier.
//!
//! For a JSON value, decides whether it denotes a resource (delegating to
//! the Term Resolver) or a literal (typed/lang/datetime detection).

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    context::Context,
    error::{ErrorCode, Result},
    resolve::{looks_like_resource_term, resolve_as_property, resolve_as_resource},
};

/// `lit^^dt` — a typed-literal suffix. Greedy on `lit` so the *last* `^^`
/// wins when a lexical form itself contains the separator.
static TYPED_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)\^\^(.+)$").unwrap());

/// `lit@lang` — a language-tagged literal suffix.
static LANGUAGE_TAGGED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)@([A-Za-z][A-Za-z0-9-]+)$").unwrap());

/// ISO-8601-shaped date/date-time. Hour, minute, second, and fraction each
/// nest inside the previous one (minute only makes sense given an hour, and
/// so on); the timezone suffix is independently optional.
static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        \d{4} -? \d{2} -? \d{2}
        (
            (T|\s+)
            \d{2}
            ( :? \d{2}
                ( :? \d{2} ( \. \d+ )? )?
            )?
        )?
        ( Z | [-+] \d{2} :? \d{2} )?
        $",
    )
    .unwrap()
});

/// The XSD namespace IRI.
pub(crate) const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// A classified value: either a resource reference or a typed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classified {
    /// A resource reference — an IRI or blank-node label.
    Resource(String),
    /// A typed literal, with optional language tag.
    Literal {
        /// The lexical form (already unescaped).
        lexical_form: String,
        /// The datatype IRI.
        datatype: String,
        /// The BCP-47-shaped language tag, present only for `xsd:string`.
        language: Option<String>,
    },
}

/// Classifies a boolean value.
pub(crate) fn classify_bool(b: bool) -> Classified {
    Classified::Literal {
        lexical_form: if b { "true" } else { "false" }.to_owned(),
        datatype: format!("{}boolean", XSD),
        language: None,
    }
}

/// Classifies an integer value using `%d`-style decimal formatting.
pub(crate) fn classify_i64(n: i64) -> Classified {
    Classified::Literal {
        lexical_form: format!("{}", n),
        datatype: format!("{}integer", XSD),
        language: None,
    }
}

/// Classifies a floating-point value using fixed-point, six fractional
/// digits (`%f`-style, C-locale).
pub(crate) fn classify_f64(f: f64) -> Classified {
    Classified::Literal {
        lexical_form: format!("{:.6}", f),
        datatype: format!("{}float", XSD),
        language: None,
    }
}

/// Classifies a string value by first match: typed literal, datetime,
/// language-tagged string, resource reference, then plain string.
pub(crate) fn classify_str(s: &str, context: &Context) -> Result<Classified> {
    // Sub-rule 1: typed literal `lit^^dt`.
    if let Some(caps) = TYPED_LITERAL.captures(s) {
        let lexical_form = unescape(&caps[1]);
        let datatype = resolve_as_property(&caps[2], context)?;
        return Ok(Classified::Literal {
            lexical_form,
            datatype,
            language: None,
        });
    }
    // Sub-rule 2: ISO-8601 date/date-time.
    if DATE_TIME.is_match(s) {
        return Ok(Classified::Literal {
            lexical_form: unescape(s),
            datatype: format!("{}dateTime", XSD),
            language: None,
        });
    }
    // Sub-rule 3: language-tagged string `lit@lang`.
    if let Some(caps) = LANGUAGE_TAGGED.captures(s) {
        return Ok(Classified::Literal {
            lexical_form: unescape(&caps[1]),
            datatype: format!("{}string", XSD),
            language: Some(caps[2].to_owned()),
        });
    }
    // Sub-rule 4: resource reference.
    if looks_like_resource_term(s, context) {
        return Ok(Classified::Resource(resolve_as_resource(s, context)?));
    }
    // Sub-rule 5: plain string literal.
    Ok(Classified::Literal {
        lexical_form: unescape(s),
        datatype: format!("{}string", XSD),
        language: None,
    })
}

/// Classifies a non-null, non-object, non-array JSON scalar.
pub(crate) fn classify_scalar(value: &Value, context: &Context) -> Result<Classified> {
    match value {
        Value::Bool(b) => Ok(classify_bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(classify_i64(i))
            } else if let Some(f) = n.as_f64() {
                Ok(classify_f64(f))
            } else {
                Err(ErrorCode::UnknownLiteralType.at(n.to_string()))
            }
        }
        Value::String(s) => classify_str(s, context),
        other => Err(ErrorCode::UnknownLiteralType.at(other.to_string())),
    }
}

/// Replaces backslash-escaped occurrences of `< > @ # : ^` with their bare
/// characters. This is how a literal containing e.g. a colon evades CURIE
/// classification.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next) if matches!(next, '<' | '>' | '@' | '#' | ':' | '^') => {
                    out.push(next);
                    chars.next();
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    out
}
