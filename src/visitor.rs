//! Read-only traversal of expression trees.
//!
//! [`ExprVisitor`] walks a tree without producing a new one; use it for
//! analyses like collecting variables or measuring tree shape. For
//! tree-to-tree rewriting, see [`crate::transform`].
//!
//! # Example
//!
//! ```
//! use treefold::{BinaryOp, Expr};
//! use treefold::visitor::{VariableCollector, walk_expr};
//!
//! let expr = Expr::binary(BinaryOp::Add, Expr::variable("x"), Expr::variable("y"));
//! let mut collector = VariableCollector::default();
//! walk_expr(&mut collector, &expr);
//! assert_eq!(collector.names, vec!["x", "y"]);
//! ```

use crate::expr::{BinaryOp, Expr, Function};

/// Trait for read-only visitors.
///
/// Implement the `visit_*`/`enter_*` methods of interest; the defaults do
/// nothing. Use [`walk_expr`] to drive the traversal.
#[allow(unused_variables)]
pub trait ExprVisitor {
    /// Called when entering any node (before the type-specific method).
    fn enter_node(&mut self, expr: &Expr) {}

    /// Called when leaving any node (after children).
    fn leave_node(&mut self, expr: &Expr) {}

    /// Visit a number literal.
    fn visit_number(&mut self, value: f64) {}

    /// Visit a variable.
    fn visit_variable(&mut self, name: &str) {}

    /// Called before visiting the operands of a binary operation.
    fn enter_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {}

    /// Called after visiting the operands of a binary operation.
    fn leave_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {}

    /// Called before visiting the argument of a function call.
    fn enter_call(&mut self, function: Function, arg: &Expr) {}

    /// Called after visiting the argument of a function call.
    fn leave_call(&mut self, function: Function, arg: &Expr) {}
}

/// Walk an expression tree depth-first, calling visitor methods.
///
/// For every node: `enter_node`, then the type-specific method, then the
/// children, then the type-specific `leave_*` (for composite nodes), then
/// `leave_node`.
pub fn walk_expr<V: ExprVisitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    visitor.enter_node(expr);

    match expr {
        Expr::Number(value) => visitor.visit_number(*value),
        Expr::Variable(name) => visitor.visit_variable(name),
        Expr::Binary(op, left, right) => {
            visitor.enter_binary(*op, left, right);
            walk_expr(visitor, left);
            walk_expr(visitor, right);
            visitor.leave_binary(*op, left, right);
        }
        Expr::Call(function, arg) => {
            visitor.enter_call(*function, arg);
            walk_expr(visitor, arg);
            visitor.leave_call(*function, arg);
        }
    }

    visitor.leave_node(expr);
}

/// Collects all variable names in traversal order.
#[derive(Debug, Default)]
pub struct VariableCollector {
    /// Collected variable names, left to right.
    pub names: Vec<String>,
}

impl ExprVisitor for VariableCollector {
    fn visit_variable(&mut self, name: &str) {
        self.names.push(name.to_string());
    }
}

/// Counts nodes by variant.
#[derive(Debug, Default)]
pub struct NodeCounter {
    /// Count of number literals.
    pub number_count: usize,
    /// Count of variables.
    pub variable_count: usize,
    /// Count of binary operations.
    pub binary_count: usize,
    /// Count of function calls.
    pub call_count: usize,
}

impl NodeCounter {
    /// Returns the total number of nodes counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.number_count + self.variable_count + self.binary_count + self.call_count
    }
}

impl ExprVisitor for NodeCounter {
    fn visit_number(&mut self, _value: f64) {
        self.number_count += 1;
    }
    fn visit_variable(&mut self, _name: &str) {
        self.variable_count += 1;
    }
    fn enter_binary(&mut self, _op: BinaryOp, _left: &Expr, _right: &Expr) {
        self.binary_count += 1;
    }
    fn enter_call(&mut self, _function: Function, _arg: &Expr) {
        self.call_count += 1;
    }
}

/// Computes the maximum depth of a tree.
#[derive(Debug, Default)]
pub struct DepthCalculator {
    current_depth: usize,
    /// Maximum depth encountered.
    pub max_depth: usize,
}

impl ExprVisitor for DepthCalculator {
    fn enter_node(&mut self, _expr: &Expr) {
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            self.max_depth = self.current_depth;
        }
    }

    fn leave_node(&mut self, _expr: &Expr) {
        self.current_depth -= 1;
    }
}
