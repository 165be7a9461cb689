//! Immutable arithmetic expression trees with transform-based rewriting.
//!
//! This crate provides:
//! - [`Expr`] - The expression tree node model (a closed sum type)
//! - [`ExprTransform`] - Trait for tree-to-tree transformations
//! - [`CopyTree`] / [`FoldConstants`] - Structural deep copy and constant folding
//! - [`ExprVisitor`] - Read-only traversal and analysis
//!
//! Trees are built bottom-up from constructors and never mutated; every
//! transformation produces a fresh tree, leaving the input untouched.
//! Evaluation and rendering are node-local recursive operations.
//!
//! # Example
//!
//! ```
//! use treefold::{BinaryOp, Expr, FoldConstants, Function};
//!
//! // abs(var * sqrt(32 - 16))
//! let expr = Expr::call(
//!     Function::Abs,
//!     Expr::binary(
//!         BinaryOp::Mul,
//!         Expr::variable("var"),
//!         Expr::call(
//!             Function::Sqrt,
//!             Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0)),
//!         ),
//!     ),
//! );
//!
//! let folded = expr.transform(&mut FoldConstants);
//! assert_eq!(folded.print(), "abs(var*4.0)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expr;
pub mod print;
pub mod transform;
pub mod visitor;


pub use error::{Error, Result};
pub use expr::{BinaryOp, Expr, Function};
pub use print::print_expr;
pub use transform::{CopyTree, ExprTransform, FoldConstants, transform_expr};
pub use visitor::{ExprVisitor, walk_expr};
