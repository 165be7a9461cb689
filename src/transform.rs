//! Tree-to-tree transformations over expression trees.
//!
//! [`ExprTransform`] has one handler per node variant; [`transform_expr`]
//! performs the variant dispatch. New transformations are added by
//! implementing the trait, without touching the node types. The default
//! handler implementations rebuild each node unchanged while recursively
//! transforming children, so an empty impl is a deep copy.
//!
//! # Example
//!
//! ```
//! use treefold::{BinaryOp, Expr, FoldConstants, Function};
//!
//! let expr = Expr::call(
//!     Function::Sqrt,
//!     Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0)),
//! );
//! let folded = expr.transform(&mut FoldConstants);
//! assert_eq!(folded, Expr::number(4.0));
//! ```

use crate::expr::{BinaryOp, Expr, Function};

/// Trait for expression tree transformations.
///
/// Each handler receives the fields of one node variant and returns a
/// newly constructed tree, which the caller owns. Handlers recursively
/// transform children first (post-order), then build the replacement node.
/// The input tree is never mutated; input and output share no nodes.
pub trait ExprTransform {
    /// Transform a number literal.
    fn transform_number(&mut self, value: f64) -> Expr {
        Expr::Number(value)
    }

    /// Transform a variable.
    fn transform_variable(&mut self, name: &str) -> Expr {
        Expr::variable(name)
    }

    /// Transform a binary operation.
    fn transform_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Expr {
        Expr::binary(op, transform_expr(self, left), transform_expr(self, right))
    }

    /// Transform a function call.
    fn transform_call(&mut self, function: Function, arg: &Expr) -> Expr {
        Expr::call(function, transform_expr(self, arg))
    }
}

/// Transform an expression tree using a transformer.
///
/// Dispatches to the handler matching the node's variant. The match is
/// exhaustive, so adding a variant without a handler is a compile error.
pub fn transform_expr<T: ExprTransform + ?Sized>(transformer: &mut T, expr: &Expr) -> Expr {
    match expr {
        Expr::Number(value) => transformer.transform_number(*value),
        Expr::Variable(name) => transformer.transform_variable(name),
        Expr::Binary(op, left, right) => transformer.transform_binary(*op, left, right),
        Expr::Call(function, arg) => transformer.transform_call(*function, arg),
    }
}

impl Expr {
    /// Applies a transformer to this tree, producing a new tree.
    ///
    /// Equivalent to [`transform_expr`].
    #[must_use]
    pub fn transform<T: ExprTransform + ?Sized>(&self, transformer: &mut T) -> Self {
        transform_expr(transformer, self)
    }
}

/// Produces a structurally identical, entirely new tree.
///
/// Uses the trait defaults unchanged. The baseline transformation, useful
/// for verifying deep-copy correctness independently of any optimization.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyTree;

impl ExprTransform for CopyTree {}

/// Folds constant subtrees to number literals in one post-order pass.
///
/// Any subtree without variables collapses to a single [`Expr::Number`];
/// subtrees containing a variable keep their structure only along the
/// variable's own path, with numeric siblings still folded locally.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldConstants;

impl ExprTransform for FoldConstants {
    fn transform_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Expr {
        let left = transform_expr(self, left);
        let right = transform_expr(self, right);
        match (&left, &right) {
            (Expr::Number(a), Expr::Number(b)) => Expr::Number(op.apply(*a, *b)),
            _ => Expr::binary(op, left, right),
        }
    }

    fn transform_call(&mut self, function: Function, arg: &Expr) -> Expr {
        let arg = transform_expr(self, arg);
        match arg {
            Expr::Number(n) => Expr::Number(function.apply(n)),
            _ => Expr::call(function, arg),
        }
    }
}
