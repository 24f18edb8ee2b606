//! Text encoding for JSX text content.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::entities;

static BRACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{+|\}+").expect("Invalid brace run regex"));

/// Encode raw text for use as JSX text content.
///
/// Markup-significant and non-ASCII characters become character references,
/// then every run of `{` or of `}` is wrapped as `{"..."}` so that it is read
/// as data and not as the start of an expression.
pub fn encode_text(text: &str) -> String {
    escape_braces(&encode_entities(text))
}

/// Character-reference encode `&`, `<`, `>`, quotes, control characters
/// and everything outside ASCII.
///
/// Named references are used where one exists, decimal references otherwise.
pub fn encode_entities(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());

    for c in text.chars() {
        if !needs_reference(c) {
            encoded.push(c);
            continue;
        }

        match entities::name_for(c) {
            Some(name) => {
                encoded.push('&');
                encoded.push_str(name);
                encoded.push(';');
            }
            None => {
                let _ = write!(encoded, "&#{};", c as u32);
            }
        }
    }

    encoded
}

/// Wrap each run of opening or closing braces in a string expression.
///
/// Runs never mix: `{}` becomes two wrapped runs.
pub fn escape_braces(text: &str) -> String {
    BRACE_RUN_RE
        .replace_all(text, |caps: &Captures| format!("{{\"{}\"}}", &caps[0]))
        .into_owned()
}

fn needs_reference(c: char) -> bool {
    match c {
        '&' | '<' | '>' | '"' | '\'' => true,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' => false,
        '\0' => false,
        c if c.is_ascii_control() => true,
        c => !c.is_ascii(),
    }
}
