//! End-to-end behaviour of the tokenize → match → resolve → predict pipeline

mod common;

use common::assertions::{assert_field_kinds, assert_partition};
use common::fixtures::builtin;
use fieldline::run;
use proptest::prelude::*;

#[test]
fn complete_statement() {
    let config = builtin();
    let text = r#"foo = "bar""#;
    let result = run(text, text.len(), &config);

    assert_eq!(result.statements.len(), 1);
    let statement = &result.statements[0];
    assert!(!statement.incomplete);
    assert_eq!(statement.error_message(), "");
    assert_eq!(statement.fields().count(), 3);
    assert!(statement.tokens.iter().all(|t| !t.invalid));
    assert_field_kinds(&result, 0, &["identifier", "comparison", "value"]);
    assert_partition(&result, text);
}

#[test]
fn value_before_identifier_is_tolerated() {
    let config = builtin();
    let text = r#"123 = "bar""#;
    let result = run(text, text.len(), &config);

    assert_eq!(result.statements.len(), 1);
    let statement = &result.statements[0];
    assert!(statement.tokens[0].invalid);
    assert!(!statement.error_message().is_empty());
    assert!(result.has_errors());
    assert_partition(&result, text);
}

#[test]
fn empty_input_predicts_first_field() {
    let config = builtin();
    let result = run("", 0, &config);
    let predicted = result.prediction.expect("a prediction");
    assert_eq!(predicted.kind, config.format()[0]);
    assert!(predicted.span.is_empty());
    assert_eq!(predicted.span.start, 0);
}

#[test]
fn prediction_mid_statement() {
    let config = builtin();
    let result = run("foo ", 4, &config);
    assert_eq!(
        result.prediction.as_ref().map(|p| p.kind.as_str()),
        Some("comparison")
    );
    assert!(result.active_token().is_none());
    assert_eq!(result.active.map(|a| a.statement), Some(0));
}

#[test]
fn active_token_follows_caret() {
    let config = builtin();

    let result = run("foo=1", 1, &config);
    assert_eq!(result.active_token().map(|t| t.kind.as_str()), Some("identifier"));

    let result = run("foo=1", 4, &config);
    assert_eq!(result.active_token().map(|t| t.kind.as_str()), Some("comparison"));
}

#[test]
fn caret_past_end_uses_last_statement() {
    let config = builtin();
    let text = "a = 1 b < 2 c";
    let result = run(text, text.len() + 10, &config);

    assert_eq!(result.statements.len(), 3);
    assert_eq!(result.active.map(|a| a.statement), Some(2));
    assert!(result.active_token().is_none());
    assert_eq!(
        result.prediction.as_ref().map(|p| p.kind.as_str()),
        Some("comparison")
    );
}

#[test]
fn trailing_whitespace_after_complete_statement_starts_a_new_one() {
    let config = builtin();
    let text = "foo = 1 ";
    let result = run(text, text.len(), &config);

    assert_eq!(result.statements.len(), 2);
    assert!(!result.statements[0].incomplete);
    assert_eq!(result.active.map(|a| a.statement), Some(1));
    assert_eq!(
        result.prediction.as_ref().map(|p| p.kind.as_str()),
        Some("identifier")
    );
}

#[test]
fn caret_on_last_field_of_complete_statement_predicts_nothing() {
    let config = builtin();
    let result = run("foo = 1 ", 7, &config);
    assert_eq!(result.active_token().map(|t| t.text.as_str()), Some("1"));
    assert!(result.prediction.is_none());
}

#[test]
fn result_serializes_for_hosts() {
    let config = builtin();
    let result = run("123 ", 4, &config);
    let json = serde_json::to_value(&result).expect("serializable");

    let statement = &json["statements"][0];
    assert_eq!(statement["incomplete"], true);
    assert_eq!(statement["error"]["expected"], "identifier");
    assert_eq!(statement["error"]["span"], serde_json::json!({ "start": 0, "end": 3 }));
    assert_eq!(statement["tokens"][0]["invalid"], true);
    // Valid tokens omit the flag
    assert!(statement["tokens"][1].get("invalid").is_none());

    assert_eq!(json["caret"], 4);
    assert_eq!(json["active"], serde_json::json!({ "statement": 0, "token": null }));
    assert_eq!(json["prediction"]["kind"], "identifier");
    assert!(json["prediction"].get("rule").is_none());
}

fn statement_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z][a-zA-Z0-9_]{0,6}",
            "(<=|>=|=|<|>)",
            "[0-9]{1,4}",
            "\"[a-z ]{0,5}\"",
            "[ \t]{1,3}",
            "[?!@#%&]{1,2}",
            "[é☃]{1,2}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tokens_partition_any_text(text in statement_text()) {
        let config = builtin();
        let result = run(&text, text.len(), &config);
        let joined: String = result.tokens().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn offsets_are_contiguous(text in statement_text()) {
        let config = builtin();
        let result = run(&text, 0, &config);
        let tokens: Vec<_> = result.tokens().collect();
        for pair in tokens.windows(2) {
            prop_assert_eq!(pair[0].span.end, pair[1].span.start);
        }
        if let Some(first) = tokens.first() {
            prop_assert_eq!(first.span.start, 0);
        }
    }

    #[test]
    fn pipeline_is_idempotent(text in statement_text(), caret in 0usize..64) {
        let config = builtin();
        prop_assert_eq!(run(&text, caret, &config), run(&text, caret, &config));
    }

    #[test]
    fn statements_never_overfill(text in statement_text()) {
        let config = builtin();
        let result = run(&text, text.len(), &config);
        for statement in &result.statements {
            prop_assert!(statement.real_len() <= config.field_count());
            prop_assert_eq!(statement.incomplete, statement.real_len() < config.field_count());
        }
    }

    #[test]
    fn active_token_is_never_filler(text in statement_text(), caret in 0usize..64) {
        let config = builtin();
        let result = run(&text, caret, &config);
        if let Some(token) = result.active_token() {
            prop_assert!(!config.is_filler(&token.kind));
            prop_assert!(token.span.touches(caret));
        }
    }
}
