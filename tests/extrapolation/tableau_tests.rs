//! tests for the generalized Richardson step
use approx::assert_relative_eq;
use numdiff::errors::ErrorKind;
use numdiff::extrapolation::errors::ExtrapolationError;
use numdiff::extrapolation::richardson_tableau;

type TestResult = Result<(), ExtrapolationError>;

#[test]
fn second_order_step() -> TestResult {
    let rep = richardson_tableau(2.0, 2.5, 2.0)?;

    assert_eq!(rep.difference, 0.5);
    assert_eq!(rep.denominator, 3.0);
    assert_relative_eq!(rep.correction, 0.5 / 3.0);
    assert_relative_eq!(rep.extrapolated, 2.5 + 0.5 / 3.0);

    let txt = rep.formatted(4);
    assert_eq!(txt.difference, "0.5000");
    assert_eq!(txt.denominator, "3.0000");
    assert_eq!(txt.correction, "0.1666");
    assert_eq!(txt.extrapolated, "2.6666");
    Ok(())
}

#[test]
fn first_order_step() -> TestResult {
    let rep = richardson_tableau(1.0, 1.5, 1.0)?;

    assert_eq!(rep.denominator, 1.0);
    assert_eq!(rep.extrapolated, 2.0);
    Ok(())
}

#[test]
fn fractional_order() -> TestResult {
    let rep = richardson_tableau(1.0, 2.0, 1.5)?;

    assert_relative_eq!(rep.denominator, 2f64.sqrt() * 2.0 - 1.0, epsilon = 1e-12);
    assert_relative_eq!(rep.extrapolated, 2.0 + 1.0 / (2f64.powf(1.5) - 1.0), epsilon = 1e-12);
    Ok(())
}

#[test]
fn negative_order() -> TestResult {
    let rep = richardson_tableau(1.0, 2.0, -1.0)?;

    assert_eq!(rep.denominator, -0.5);
    assert_eq!(rep.extrapolated, 0.0);
    Ok(())
}

#[test]
fn inputs_are_kept() -> TestResult {
    let rep = richardson_tableau(-3.0, 4.0, 4.0)?;

    assert_eq!((rep.a_h, rep.a_h2, rep.order), (-3.0, 4.0, 4.0));
    assert_eq!(rep.denominator, 15.0);
    Ok(())
}

#[test]
fn degenerate_order() {
    let err = richardson_tableau(1.0, 2.0, 0.0).unwrap_err();
    assert!(matches!(err, ExtrapolationError::DegenerateOrder { order } if order == 0.0));
    assert_eq!(err.kind(), ErrorKind::DegenerateOrder);

    // 2^p rounds to exactly 1
    let err = richardson_tableau(1.0, 2.0, 1e-300).unwrap_err();
    assert!(matches!(err, ExtrapolationError::DegenerateOrder { .. }));
}

#[test]
fn non_finite_inputs() {
    let err = richardson_tableau(f64::NAN, 1.0, 2.0).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "A(h)", .. }));

    let err = richardson_tableau(1.0, f64::INFINITY, 2.0).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "A(h/2)", .. }));

    let err = richardson_tableau(1.0, 2.0, f64::NEG_INFINITY).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "p", .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn order_overflow() {
    let err = richardson_tableau(1.0, 2.0, 2000.0).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "p", .. }));
}

#[test]
fn result_overflow() {
    let err = richardson_tableau(-f64::MAX, f64::MAX, 2.0).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { .. }));
}
