//! Deep copy through the public API.

use treefold::{BinaryOp, CopyTree, Expr, Function};

fn demo_tree() -> Expr {
    // abs(var * sqrt(32 - 16))
    Expr::call(
        Function::Abs,
        Expr::binary(
            BinaryOp::Mul,
            Expr::variable("var"),
            Expr::call(
                Function::Sqrt,
                Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0)),
            ),
        ),
    )
}

#[test]
fn copy_renders_identically() {
    let expr = demo_tree();
    let copied = expr.transform(&mut CopyTree);
    assert_eq!(copied.print(), expr.print());
    assert_eq!(copied.print(), "abs(var*sqrt(32.0-16.0))");
}

#[test]
fn copy_is_independent_of_the_original() {
    let expr = demo_tree();
    let copied = expr.transform(&mut CopyTree);
    drop(expr);
    assert_eq!(copied.evaluate(), 0.0);
    assert_eq!(copied.print(), "abs(var*sqrt(32.0-16.0))");
}

#[test]
fn original_is_independent_of_the_copy() {
    let expr = demo_tree();
    let copied = expr.transform(&mut CopyTree);
    drop(copied);
    assert_eq!(expr.print(), "abs(var*sqrt(32.0-16.0))");
}

#[test]
fn copy_of_a_leaf() {
    let number = Expr::number(1.234);
    assert_eq!(number.transform(&mut CopyTree), number);

    let variable = Expr::variable("x");
    assert_eq!(variable.transform(&mut CopyTree), variable);
}
