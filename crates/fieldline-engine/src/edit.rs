//! Text edits for inserting chosen suggestions

use fieldline_ast::Span;
use serde::Serialize;

use crate::{EditError, ParseResult, SuggestionRequest};

/// New text and where the caret should go
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub text: String,
    pub caret: usize,
}

/// Replace `span` in `text`, leaving the caret after the replacement.
///
/// The span is clamped to the text and to char boundaries.
pub fn splice(text: &str, span: Span, replacement: &str) -> Edit {
    let start = floor_boundary(text, span.start);
    let end = floor_boundary(text, span.end).max(start);

    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);

    Edit {
        text: out,
        caret: start + replacement.len(),
    }
}

fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Replace the token under the caret with `values` joined by commas
pub fn replace_active_token<S: AsRef<str>>(
    text: &str,
    result: &ParseResult,
    values: &[S],
) -> Result<Edit, EditError> {
    let token = result.active_token().ok_or(EditError::NoActiveToken)?;
    Ok(splice(text, token.span, &join(values)))
}

/// Append `values` joined by commas, caret at the new end
pub fn append_values<S: AsRef<str>>(text: &str, values: &[S]) -> Edit {
    splice(text, Span::at(text.len()), &join(values))
}

/// Apply one chosen suggestion to the span its request targets
pub fn insert_suggestion(text: &str, request: &SuggestionRequest, value: &str) -> Edit {
    splice(text, request.replace, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_config;
    use crate::run;

    #[test]
    fn test_splice() {
        let edit = splice("foo = 1", Span::new(0, 3), "bar");
        assert_eq!(edit.text, "bar = 1");
        assert_eq!(edit.caret, 3);
    }

    #[test]
    fn test_splice_clamps_out_of_range_spans() {
        let edit = splice("abc", Span::new(2, 10), "Z");
        assert_eq!(edit.text, "abZ");
        let edit = splice("abc", Span::new(9, 12), "!");
        assert_eq!(edit.text, "abc!");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_splice_respects_char_boundaries() {
        // offset 1 is inside "é"
        let edit = splice("é1", Span::new(1, 3), "x");
        assert_eq!(edit.text, "x");
    }

    #[test]
    fn test_replace_active_token() {
        let config = default_config().unwrap();
        let text = "fo = 1";
        let result = run(text, 1, &config);
        let edit = replace_active_token(text, &result, &["foo42"]).unwrap();
        assert_eq!(edit.text, "foo42 = 1");
        assert_eq!(edit.caret, 5);
    }

    #[test]
    fn test_replace_joins_values() {
        let config = default_config().unwrap();
        let text = "a = 1";
        let result = run(text, 5, &config);
        let edit = replace_active_token(text, &result, &["1", "2"]).unwrap();
        assert_eq!(edit.text, "a = 1,2");
    }

    #[test]
    fn test_replace_without_active_token() {
        let config = default_config().unwrap();
        let result = run("foo ", 4, &config);
        assert_eq!(
            replace_active_token("foo ", &result, &["x"]),
            Err(EditError::NoActiveToken)
        );
    }

    #[test]
    fn test_append_values() {
        let edit = append_values("foo ", &["="]);
        assert_eq!(
            edit,
            Edit {
                text: "foo =".to_string(),
                caret: 5
            }
        );
    }

    #[test]
    fn test_insert_suggestion_for_prediction() {
        let config = default_config().unwrap();
        let result = run("foo ", 4, &config);
        let request = SuggestionRequest::for_result(&result, &config).unwrap();
        let edit = insert_suggestion("foo ", &request, ">=");
        assert_eq!(edit.text, "foo >=");
        let next = run(&edit.text, edit.caret, &config).prediction;
        assert_eq!(next.map(|p| p.kind).as_deref(), Some("value"));
    }
}
