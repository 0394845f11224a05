//! tests for the non-uniform second derivative
use numdiff::differentiation::errors::DifferentiationError;
use numdiff::differentiation::second::second_derivative;
use numdiff::differentiation::{parse_points, parse_points_delimited, DerivativeCfg};
use numdiff::errors::ErrorKind;

type TestResult = Result<(), DifferentiationError>;

#[test]
fn non_uniform_quadratic() -> TestResult {
    let set = parse_points([("0", "0"), ("1", "1"), ("3", "9")])?;
    let rep = second_derivative(&set, 1.0, DerivativeCfg::new())?;

    assert_eq!(rep.index, 1);
    assert_eq!(rep.h1, 1.0);
    assert_eq!(rep.h2, 2.0);
    assert_eq!(rep.forward_slope, 4.0);
    assert_eq!(rep.backward_slope, 1.0);
    assert_eq!(rep.value, 2.0);
    assert_eq!(rep.formatted_value(), "2.000000000");
    Ok(())
}

#[test]
fn uniform_mesh_matches_centered_formula() -> TestResult {
    // y = x^3 on h = 0.5: (y[i+1] - 2y[i] + y[i-1]) / h^2 = 6x
    let set = parse_points_delimited("0,0;0.5,0.125;1,1;1.5,3.375")?;
    let rep = second_derivative(&set, 1.0, DerivativeCfg::new())?;

    assert_eq!(rep.value, 6.0);
    Ok(())
}

#[test]
fn truncated_value() -> TestResult {
    // (1/3 - 1) / 2 = -0.3333...
    let set = parse_points([("0", "0"), ("1", "1"), ("4", "2")])?;
    let rep = second_derivative(&set, 1.0, DerivativeCfg::new())?;

    assert_eq!(rep.value, -0.333333333);
    assert_eq!(rep.formatted_value(), "-0.333333333");
    Ok(())
}

#[test]
fn node_not_found() {
    let set = parse_points([("0", "0"), ("1", "1"), ("3", "9")]).unwrap();
    let err = second_derivative(&set, 2.0, DerivativeCfg::new()).unwrap_err();

    assert_eq!(err, DifferentiationError::NodeNotFound { x: 2.0 });
    assert_eq!(err.kind(), ErrorKind::NodeNotFound);
}

#[test]
fn boundary_nodes() {
    let set = parse_points([("0", "0"), ("1", "1"), ("3", "9")]).unwrap();

    let err = second_derivative(&set, 0.0, DerivativeCfg::new()).unwrap_err();
    assert_eq!(err, DifferentiationError::BoundaryNode { x: 0.0 });
    assert_eq!(err.kind(), ErrorKind::BoundaryNode);

    let err = second_derivative(&set, 3.0, DerivativeCfg::new()).unwrap_err();
    assert_eq!(err, DifferentiationError::BoundaryNode { x: 3.0 });
}

#[test]
fn too_few_points_is_boundary() {
    let set = parse_points([("0", "0"), ("1", "1")]).unwrap();
    let err = second_derivative(&set, 1.0, DerivativeCfg::new()).unwrap_err();
    assert!(matches!(err, DifferentiationError::BoundaryNode { .. }));

    let set = parse_points([("5", "1")]).unwrap();
    let err = second_derivative(&set, 5.0, DerivativeCfg::new()).unwrap_err();
    assert!(matches!(err, DifferentiationError::BoundaryNode { .. }));
}

#[test]
fn custom_decimals() -> TestResult {
    let set = parse_points([("0", "0"), ("1", "1"), ("4", "2")])?;
    let rep = second_derivative(&set, 1.0, DerivativeCfg::new().with_decimals(3))?;

    assert_eq!(rep.value, -0.333);
    assert_eq!(rep.formatted_value(), "-0.333");
    Ok(())
}

#[test]
fn overflowing_estimate() {
    let set = parse_points([(0.0, 0.0), (1.0, 1e308), (2.0, -1e308)]).unwrap();
    let err = second_derivative(&set, 1.0, DerivativeCfg::new()).unwrap_err();

    assert!(matches!(err, DifferentiationError::NonFiniteResult { quantity: "second_derivative", index: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
