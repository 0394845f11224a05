//! tests for the keypad text helper
use numdiff::expression::keypad::{append_token, apply, KeypadAction};
use numdiff::expression::Expression;

#[test]
fn inserts_multiplication() {
    assert_eq!(append_token("2", "x"), "2 * x");
    assert_eq!(append_token("x", "x"), "x * x");
    assert_eq!(append_token("x", "2"), "x * 2");
    assert_eq!(append_token("(x+1)", "("), "(x+1) * (");
    assert_eq!(append_token("(x+1)", "3"), "(x+1) * 3");
    assert_eq!(append_token("2", "Math.sin("), "2 * Math.sin(");
    assert_eq!(append_token("Math.PI", "x"), "Math.PI * x");
    assert_eq!(append_token("Math.E", "2"), "Math.E * 2");
}

#[test]
fn plain_append() {
    assert_eq!(append_token("", "x"), "x");
    assert_eq!(append_token("2", "3"), "23");
    assert_eq!(append_token("2", "."), "2.");
    assert_eq!(append_token("x", "+"), "x+");
    assert_eq!(append_token("x^", "2"), "x^2");
    assert_eq!(append_token("(", "x"), "(x");
    assert_eq!(append_token("2 * ", "Math.PI"), "2 * Math.PI");
}

#[test]
fn clear_and_backspace() {
    assert_eq!(apply("x^2", KeypadAction::Clear), "");
    assert_eq!(apply("x^2", KeypadAction::Backspace), "x^");
    assert_eq!(apply("", KeypadAction::Backspace), "");
    assert_eq!(apply("2", KeypadAction::Append("x")), "2 * x");
}

#[test]
fn builds_parseable_expression() {
    let presses = ["2", "x", "^", "2", "+", "Math.PI"];
    let text = presses
        .iter()
        .fold(String::new(), |acc, t| apply(&acc, KeypadAction::Append(t)));

    assert_eq!(text, "2 * x^2+Math.PI");
    let f = Expression::parse(&text).unwrap();
    assert_eq!(f.eval(3.0), Ok(18.0 + std::f64::consts::PI));
}
