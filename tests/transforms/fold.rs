//! Constant folding through the public API.

use treefold::{BinaryOp, Expr, FoldConstants, Function};

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
fn demo_tree_folds_around_the_variable() {
    let folded = demo_tree().transform(&mut FoldConstants);
    assert_eq!(folded.print(), "abs(var*4.0)");
}

#[test]
fn folding_preserves_the_evaluated_value() {
    let expr = demo_tree();
    let folded = expr.transform(&mut FoldConstants);
    assert_eq!(expr.evaluate(), 0.0);
    assert_eq!(folded.evaluate(), 0.0);
}

#[test]
fn constant_tree_collapses_to_one_number() {
    // 2 * sqrt(32 - 16) has no variables, so it folds completely.
    let expr = Expr::binary(
        BinaryOp::Mul,
        Expr::number(2.0),
        Expr::call(
            Function::Sqrt,
            Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0)),
        ),
    );
    let folded = expr.transform(&mut FoldConstants);
    assert_eq!(folded, Expr::number(8.0));
    assert_eq!(folded.evaluate(), expr.evaluate());
}

#[test]
fn partially_constant_children_still_fold() {
    // (1 + 2) / x keeps the division but folds the addition.
    let expr = Expr::binary(
        BinaryOp::Div,
        Expr::binary(BinaryOp::Add, Expr::number(1.0), Expr::number(2.0)),
        Expr::variable("x"),
    );
    let folded = expr.transform(&mut FoldConstants);
    assert_eq!(folded.print(), "3.0/x");
}

#[test]
fn folding_twice_changes_nothing() {
    let once = demo_tree().transform(&mut FoldConstants);
    let twice = once.transform(&mut FoldConstants);
    assert_eq!(once, twice);
}

#[test]
fn fold_leaves_the_input_tree_intact() {
    let expr = demo_tree();
    let _ = expr.transform(&mut FoldConstants);
    assert_eq!(expr.print(), "abs(var*sqrt(32.0-16.0))");
}
