//! Fieldline Lexer - Rule-driven tokenization
//!
//! Splits text into tokens using an ordered list of [`TokenRule`]s:
//! - the leftmost match wins, ties go to the earlier rule
//! - whitespace is an implicit last rule
//! - text no rule covers becomes a token of the default type

mod rule;

pub use rule::*;

use std::borrow::Borrow;

use fieldline_ast::{Token, WHITESPACE};

/// A winning match inside the remaining text
struct Candidate<'r> {
    kind: &'r str,
    start: usize,
    end: usize,
}

/// Tokenize `text`. The returned tokens partition it exactly.
///
/// `rules` may be plain rules or shared handles such as `Arc<TokenRule>`.
pub fn tokenize<R: Borrow<TokenRule>>(text: &str, rules: &[R], default_type: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        match best_match(rest, rules) {
            Some(Candidate { kind, start, end }) => {
                if start > 0 {
                    tokens.push(Token::new(&rest[..start], default_type, pos));
                }
                tokens.push(Token::new(&rest[start..end], kind, pos + start));
                debug_assert!(end > 0, "tokenizer must consume input");
                pos += end;
            }
            None => {
                tokens.push(Token::new(rest, default_type, pos));
                pos = text.len();
            }
        }
    }

    tracing::trace!(len = text.len(), tokens = tokens.len(), "tokenized");
    tokens
}

fn best_match<'r, R: Borrow<TokenRule>>(rest: &str, rules: &'r [R]) -> Option<Candidate<'r>> {
    let mut best: Option<Candidate<'r>> = None;

    let found = rules
        .iter()
        .map(<R as Borrow<TokenRule>>::borrow)
        .filter_map(|rule: &'r TokenRule| {
            rule.find_in(rest).map(|m| Candidate {
                kind: rule.name.as_str(),
                start: m.start(),
                end: m.end(),
            })
        })
        .chain(find_whitespace(rest));

    for candidate in found {
        // Only a strictly earlier match replaces the current one
        if best.as_ref().map_or(true, |b| candidate.start < b.start) {
            best = Some(candidate);
        }
    }

    best
}

/// The implicit whitespace rule: the first run of one or more whitespace chars
fn find_whitespace<'r>(rest: &str) -> Option<Candidate<'r>> {
    let (start, _) = rest.char_indices().find(|(_, c)| c.is_whitespace())?;
    let len = rest[start..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(rest.len() - start);

    Some(Candidate {
        kind: WHITESPACE,
        start,
        end: start + len,
    })
}
