//! Demonstration of the transformation pipeline.
//!
//! Builds the tree for `abs(var * sqrt(32 - 16))`, then prints the result
//! of the copy transform (identical to the input) and the fold transform
//! (`sqrt(32 - 16)` collapses to `4`, while the variable multiplication
//! and the surrounding `abs` remain).
//!
//! Run with: `cargo run --example fold_demo`

use treefold::{BinaryOp, CopyTree, Expr, FoldConstants, Function};

fn main() {
    let tree = Expr::call(
        Function::Abs,
        Expr::binary(
            BinaryOp::Mul,
            Expr::variable("var"),
            Expr::call(
                Function::Sqrt,
                Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0)),
            ),
        ),
    );

    let copied = tree.transform(&mut CopyTree);
    println!("{copied}");

    let folded = tree.transform(&mut FoldConstants);
    println!("{folded}");
}
