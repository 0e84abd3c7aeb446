// Tolerant key/value matching over Valve's text KeyValues (VDF) format
//
// Deliberately partial: this tokenizes quoted strings and braces, tracks
// nesting depth, and answers "values of key K inside blocks matching P".
// Unquoted tokens, comments, #include directives and conditionals are not
// understood. Stray closing braces are dropped and unterminated blocks are
// closed by end of input, so a damaged file still yields what it can.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)"|\{|\}"#).expect("valid token regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Str(String),
    Open,
    Close,
}

/// One structural step through the document
///
/// `depth` is the number of enclosing blocks (0 = top level).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Open { name: String, depth: usize },
    Close { depth: usize },
    Pair { key: String, value: String, depth: usize },
}

/// Undo VDF string escapes (`\\`, `\"`, `\n`, `\t`)
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(text)
        .map(|caps| match caps.get(1) {
            Some(inner) => Token::Str(unescape(inner.as_str())),
            None if &caps[0] == "{" => Token::Open,
            None => Token::Close,
        })
        .collect()
}

pub fn events(text: &str) -> Vec<Event> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut pending: Option<String> = None;

    for token in tokenize(text) {
        match token {
            Token::Str(s) => match pending.take() {
                Some(key) => out.push(Event::Pair {
                    key,
                    value: s,
                    depth,
                }),
                None => pending = Some(s),
            },
            Token::Open => {
                out.push(Event::Open {
                    name: pending.take().unwrap_or_default(),
                    depth,
                });
                depth += 1;
            }
            Token::Close => {
                // A dangling key before a brace has no value
                pending = None;
                if depth == 0 {
                    continue;
                }
                depth -= 1;
                out.push(Event::Close { depth });
            }
        }
    }

    out
}

/// Values of `key` sitting directly inside every block accepted by `is_block`
///
/// `is_block` receives the block name and its depth. Only the first match per
/// block is taken, keys nested in child blocks are not visible to the parent,
/// and key comparison ignores ASCII case. Order follows the document.
pub fn values_in_blocks<F>(text: &str, key: &str, is_block: F) -> Vec<String>
where
    F: Fn(&str, usize) -> bool,
{
    let mut out = Vec::new();
    // (accepted, already_found) per open block
    let mut frames: Vec<(bool, bool)> = Vec::new();

    for event in events(text) {
        match event {
            Event::Open { name, depth } => frames.push((is_block(&name, depth), false)),
            Event::Close { .. } => {
                frames.pop();
            }
            Event::Pair { key: k, value, .. } => {
                if let Some((true, found)) = frames.last_mut()
                    && !*found
                    && k.eq_ignore_ascii_case(key)
                {
                    *found = true;
                    out.push(value);
                }
            }
        }
    }

    out
}

/// Values of every plain key/value pair whose key and depth satisfy `accept`
pub fn values_of_keys<F>(text: &str, accept: F) -> Vec<String>
where
    F: Fn(&str, usize) -> bool,
{
    events(text)
        .into_iter()
        .filter_map(|event| match event {
            Event::Pair { key, value, depth } if accept(&key, depth) => Some(value),
            _ => None,
        })
        .collect()
}
