//! `{field}` placeholder substitution.
//!
//! Placeholders are looked up by exact name in the row. `{{` and `}}` emit a
//! literal brace. Anything else that looks like a placeholder but cannot be
//! resolved is an error: an unknown field, an empty `{}`, an unterminated `{`
//! or a stray `}`.
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::DataRow;

/// Replace every `{name}` in `text` with `row[name]`.
///
/// `origin` names the template file in error messages.
pub fn substitute(text: &str, row: &DataRow, origin: &Path) -> Result<String> {
    let malformed = |reason: String| Error::MalformedTemplate {
        template: origin.to_path_buf(),
        reason,
    };

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if tail.starts_with('}') {
            return Err(malformed(format!(
                "single '}}' at byte {}",
                text.len() - tail.len()
            )));
        } else {
            let body = &tail[1..];
            let end = body.find(['}', '{']).filter(|&i| body.as_bytes()[i] == b'}');
            let Some(end) = end else {
                return Err(malformed(format!(
                    "unterminated placeholder at byte {}",
                    text.len() - tail.len()
                )));
            };
            let name = &body[..end];
            if name.is_empty() {
                return Err(malformed("empty placeholder '{}'".to_string()));
            }
            let value = row.get(name).ok_or_else(|| Error::MissingField {
                field: name.to_string(),
                template: origin.to_path_buf(),
            })?;
            out.push_str(value);
            rest = &body[end + 1..];
        }
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> DataRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_named_fields() {
        let r = row(&[("name", "Alice"), ("role", "Speaker")]);
        let out = substitute("<p>{name}</p><em>{role}</em>{name}", &r, Path::new("t.html")).unwrap();
        assert_eq!(out, "<p>Alice</p><em>Speaker</em>Alice");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let out = substitute("<div>plain</div>", &DataRow::new(), Path::new("t.html")).unwrap();
        assert_eq!(out, "<div>plain</div>");
    }

    #[test]
    fn doubled_braces_are_literal() {
        let r = row(&[("c", "red")]);
        let out = substitute("<style>p {{ color: {c}; }}</style>", &r, Path::new("t.html")).unwrap();
        assert_eq!(out, "<style>p { color: red; }</style>");
    }

    #[test]
    fn values_are_not_rescanned() {
        let r = row(&[("a", "{b}")]);
        assert_eq!(substitute("{a}", &r, Path::new("t.html")).unwrap(), "{b}");
    }

    #[test]
    fn missing_field_names_field_and_template() {
        let r = row(&[("name", "Alice")]);
        match substitute("<p>{age}</p>", &r, Path::new("badge.html")) {
            Err(Error::MissingField { field, template }) => {
                assert_eq!(field, "age");
                assert_eq!(template, Path::new("badge.html"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn malformed_placeholders_are_rejected() {
        let r = row(&[("a", "1")]);
        for text in ["{a", "a}", "{}", "{a{b}"] {
            assert!(
                matches!(
                    substitute(text, &r, Path::new("t.html")),
                    Err(Error::MalformedTemplate { .. })
                ),
                "{text} should be malformed"
            );
        }
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let r = row(&[("nome", "José")]);
        let out = substitute("Olá {nome} — ✓", &r, Path::new("t.html")).unwrap();
        assert_eq!(out, "Olá José — ✓");
    }
}
