//! Construction and evaluation through the public API.

use treefold::{BinaryOp, Error, Expr, Function};

#[test]
fn build_and_evaluate_difference() {
    let expr = Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0));
    assert_eq!(expr.evaluate(), 16.0);
    assert_eq!(expr.print(), "32.0-16.0");
}

#[test]
fn printed_numbers_roundtrip() {
    let expr = Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0));
    let printed = expr.print();
    let (left, right) = printed.split_once('-').unwrap();
    assert_eq!(left.parse::<f64>().unwrap(), 32.0);
    assert_eq!(right.parse::<f64>().unwrap(), 16.0);
}

#[test]
fn build_and_evaluate_sqrt() {
    let expr = Expr::call(
        Function::Sqrt,
        Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0)),
    );
    assert_eq!(expr.evaluate(), 4.0);
}

#[test]
fn division_by_zero_is_infinity_not_a_fault() {
    let expr = Expr::binary(BinaryOp::Div, Expr::number(5.0), Expr::number(0.0));
    assert_eq!(expr.evaluate(), f64::INFINITY);

    let expr = Expr::binary(BinaryOp::Div, Expr::number(-5.0), Expr::number(0.0));
    assert_eq!(expr.evaluate(), f64::NEG_INFINITY);

    let expr = Expr::binary(BinaryOp::Div, Expr::number(0.0), Expr::number(0.0));
    assert!(expr.evaluate().is_nan());
}

#[test]
fn variables_always_evaluate_to_zero() {
    let expr = Expr::binary(
        BinaryOp::Mul,
        Expr::variable("anything"),
        Expr::number(100.0),
    );
    assert_eq!(expr.evaluate(), 0.0);
}

#[test]
fn call_construction_rejects_unknown_names() {
    let err = Expr::call_named("sin", Expr::number(1.0)).unwrap_err();
    assert_eq!(err, Error::UnknownFunction("sin".to_string()));

    assert!(Expr::call_named("sqrt", Expr::number(1.0)).is_ok());
    assert!(Expr::call_named("abs", Expr::number(1.0)).is_ok());
}

#[test]
fn binary_construction_rejects_unknown_symbols() {
    let err = Expr::binary_from_symbol('%', Expr::number(1.0), Expr::number(2.0)).unwrap_err();
    assert_eq!(err, Error::UnknownOperator('%'));

    for symbol in ['+', '-', '*', '/'] {
        assert!(Expr::binary_from_symbol(symbol, Expr::number(1.0), Expr::number(2.0)).is_ok());
    }
}
