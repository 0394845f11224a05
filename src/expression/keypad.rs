//! Text helper for building an expression from keypad presses.
//!
//! Pure string transformations for a UI layer; the parser never calls these.
//! Appending inserts an explicit ` * ` where the user would expect implicit
//! multiplication, since the grammar has none:
//!
//! ┌ `x`, `Math.*` or `(` after a digit, `x`, `.`, `)` or a trailing constant
//! └ a digit after `x`, `)` or a trailing constant

/// Tokens treated as constants when they end the current text.
const CONSTANT_SUFFIXES: [&str; 2] = ["Math.E", "Math.PI"];


/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction<'a> {
    Append(&'a str),
    Clear,
    Backspace,
}

/// Applies `action` to `current` and returns the new text.
pub fn apply(current: &str, action: KeypadAction<'_>) -> String {
    match action {
        KeypadAction::Append(token) => append_token(current, token),
        KeypadAction::Clear => String::new(),
        KeypadAction::Backspace => {
            let mut out = current.to_owned();
            out.pop();
            out
        }
    }
}

/// Appends `token` to `current`, inserting ` * ` when the two would otherwise
/// be juxtaposed.
///
/// ```
/// use numdiff::expression::keypad::append_token;
/// assert_eq!(append_token("2", "x"), "2 * x");
/// assert_eq!(append_token("x", "+"), "x+");
/// ```
pub fn append_token(current: &str, token: &str) -> String {
    let last = current.chars().last();
    let ends_with_constant = CONSTANT_SUFFIXES.iter().any(|c| current.ends_with(c));

    let opens_factor = token == "x" || token == "(" || token.starts_with("Math.");
    let is_digit     = token.chars().next().is_some_and(|c| c.is_ascii_digit());

    let needs_mul = if opens_factor {
        ends_with_constant
            || matches!(last, Some(c) if c.is_ascii_digit() || matches!(c, 'x' | '.' | ')'))
    } else if is_digit {
        ends_with_constant || matches!(last, Some('x' | ')'))
    } else {
        false
    };

    if needs_mul {
        format!("{current} * {token}")
    } else {
        format!("{current}{token}")
    }
}
