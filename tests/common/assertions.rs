use fieldline::ParseResult;

/// Assert that the tokens reproduce `text` and abut each other
pub fn assert_partition(result: &ParseResult, text: &str) {
    let joined: String = result.tokens().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, text, "tokens do not reproduce the input");

    let tokens: Vec<_> = result.tokens().collect();
    for pair in tokens.windows(2) {
        assert_eq!(
            pair[0].span.end, pair[1].span.start,
            "gap or overlap between {:?} and {:?}",
            pair[0], pair[1]
        );
    }
    if let Some(last) = tokens.last() {
        assert_eq!(last.span.end, text.len());
    }
}

/// Assert the kinds of the non-whitespace tokens in one statement
pub fn assert_field_kinds(result: &ParseResult, statement: usize, kinds: &[&str]) {
    let found: Vec<&str> = result.statements[statement]
        .tokens
        .iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| t.kind.as_str())
        .collect();
    assert_eq!(found, kinds);
}
