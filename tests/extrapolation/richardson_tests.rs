//! tests for Richardson extrapolation of the central difference
use approx::assert_abs_diff_eq;
use numdiff::errors::ErrorKind;
use numdiff::expression::errors::EvalError;
use numdiff::expression::Expression;
use numdiff::extrapolation::errors::{ExtrapolationError, NonFiniteOutput};
use numdiff::extrapolation::{central_difference, richardson, richardson_expr, richardson_fallible, RichardsonCfg};

type TestResult = Result<(), ExtrapolationError>;

#[test]
fn plain_central_difference() {
    assert_eq!(central_difference(|x| x * x, 3.0, 0.5), 6.0);
}

#[test]
fn cubic_error_shrinks() -> TestResult {
    let rep = richardson(|x| x * x * x, 1.0, 0.1, RichardsonCfg::new())?;

    // D(h) = 3x^2 + h^2 exactly for a cubic
    assert_abs_diff_eq!(rep.raw.d_h1, 3.01, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.raw.d_h2, 3.0025, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.raw.extrapolated, 3.0, epsilon = 1e-12);

    let err = |v: f64| (v - 3.0).abs();
    assert!(err(rep.raw.extrapolated) < err(rep.raw.d_h2));
    assert!(err(rep.raw.d_h2) < err(rep.raw.d_h1));

    assert_eq!(rep.x, 1.0);
    assert_eq!(rep.h1, 0.1);
    assert_eq!(rep.h2, 0.05);
    assert_eq!(rep.evaluations, 4);
    Ok(())
}

#[test]
fn reported_values_are_truncated_raw_values() -> TestResult {
    let rep = richardson(f64::exp, 0.0, 0.1, RichardsonCfg::new().with_decimals(4))?;

    assert_eq!(rep.decimals, 4);
    assert_eq!(rep.d_h1, numdiff::format::truncate(rep.raw.d_h1, 4));
    assert_eq!(rep.d_h2, numdiff::format::truncate(rep.raw.d_h2, 4));
    assert_eq!(rep.extrapolated, numdiff::format::truncate(rep.raw.extrapolated, 4));
    assert_abs_diff_eq!(rep.raw.extrapolated, 1.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn evaluation_order() -> TestResult {
    let mut calls = Vec::new();
    richardson(|t| { calls.push(t); t }, 2.0, 0.5, RichardsonCfg::new())?;

    assert_eq!(calls, vec![2.5, 1.5, 2.25, 1.75]);
    Ok(())
}

#[test]
fn negative_step_allowed() -> TestResult {
    let rep = richardson(|x| x * x, 1.0, -0.2, RichardsonCfg::new())?;

    assert_eq!(rep.h2, -0.1);
    assert_abs_diff_eq!(rep.raw.extrapolated, 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn formatted_output() -> TestResult {
    let rep = richardson(|x| x * x, 1.0, 0.1, RichardsonCfg::new())?;
    let txt = rep.formatted();

    assert_eq!(txt.x, "1.000000000");
    assert_eq!(txt.h1, "0.100000000");
    assert_eq!(txt.h2, "0.050000000");
    Ok(())
}

#[test]
fn invalid_step() {
    for h in [0.0, -0.0, f64::NAN, f64::INFINITY] {
        let err = richardson(|x| x, 1.0, h, RichardsonCfg::new()).unwrap_err();
        assert!(matches!(err, ExtrapolationError::InvalidInput { name: "h", .. }), "h = {h}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn step_underflow() {
    let h = f64::from_bits(1); // smallest subnormal
    let err = richardson(|x| x, 1.0, h, RichardsonCfg::new()).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "h", .. }));
}

#[test]
fn invalid_point() {
    let err = richardson(|x| x, f64::INFINITY, 0.1, RichardsonCfg::new()).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "x", .. }));

    let err = richardson(|x| x, f64::NAN, 0.1, RichardsonCfg::new()).unwrap_err();
    assert!(matches!(err, ExtrapolationError::InvalidInput { name: "x", .. }));
}

#[test]
fn invalid_decimals() {
    let err = richardson(|x| x, 1.0, 0.1, RichardsonCfg::new().with_decimals(99)).unwrap_err();
    assert!(matches!(err, ExtrapolationError::Format(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn non_finite_output() {
    // x - h = -0.05 leaves the domain of ln
    let err = richardson(f64::ln, 0.05, 0.1, RichardsonCfg::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FunctionEvaluation);

    let ExtrapolationError::FunctionEvaluation { x, source } = err else {
        panic!("expected FunctionEvaluation");
    };
    assert!(x < 0.0);
    let cause = source.downcast_ref::<NonFiniteOutput>().unwrap();
    assert!(cause.fx.is_nan());
}

#[test]
fn overflowing_difference() {
    let f = |x: f64| if x > 0.0 { f64::MAX } else { -f64::MAX };
    let err = richardson(f, 0.0, 1.0, RichardsonCfg::new()).unwrap_err();

    assert!(matches!(err, ExtrapolationError::NonFiniteEstimate { h, .. } if h == 1.0));
    assert_eq!(err.kind(), ErrorKind::FunctionEvaluation);
}

#[test]
fn fallible_error_propagates() {
    let f = |x: f64| {
        if x > 1.0 {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
        } else {
            Ok(x)
        }
    };
    let err = richardson_fallible(f, 1.0, 0.5, RichardsonCfg::new()).unwrap_err();

    assert!(err.to_string().contains("boom"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(matches!(err, ExtrapolationError::FunctionEvaluation { x, .. } if x == 1.5));
}

#[test]
fn expression_form() -> TestResult {
    let f = Expression::parse("x^3").unwrap();
    let rep = richardson_expr(&f, 1.0, 0.1, RichardsonCfg::new())?;

    assert_abs_diff_eq!(rep.raw.extrapolated, 3.0, epsilon = 1e-12);
    assert_eq!(rep.evaluations, 4);
    Ok(())
}

#[test]
fn expression_division_by_zero() {
    // x - h == 0 on the first pair
    let f = Expression::parse("1/x").unwrap();
    let err = richardson_expr(&f, 0.1, 0.1, RichardsonCfg::new()).unwrap_err();

    let ExtrapolationError::FunctionEvaluation { source, .. } = err else {
        panic!("expected FunctionEvaluation");
    };
    assert_eq!(source.downcast_ref::<EvalError>(), Some(&EvalError::DivisionByZero));
}
