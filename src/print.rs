//! Renderer for expression trees.
//!
//! Converts an [`Expr`] to its canonical textual form. The rendering is
//! deterministic and numeric literals round-trip to the same value, but
//! binary operations are printed without parentheses, so the output does
//! not encode operator precedence. It is a display format, not a
//! serialization format.
//!
//! # Example
//!
//! ```
//! use treefold::{BinaryOp, Expr, print_expr};
//!
//! let expr = Expr::binary(BinaryOp::Sub, Expr::number(32.0), Expr::number(16.0));
//! assert_eq!(print_expr(&expr), "32.0-16.0");
//! ```

use std::fmt;

use crate::expr::Expr;

/// Renders an expression tree to a string.
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::default();
    printer.print(expr);
    printer.output
}

impl Expr {
    /// Renders this tree to a string. Equivalent to [`print_expr`].
    #[must_use]
    pub fn print(&self) -> String {
        print_expr(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_expr(self))
    }
}

/// Renderer state.
#[derive(Default)]
struct Printer {
    output: String,
}

impl Printer {
    fn print(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(value) => self.print_float(*value),
            Expr::Variable(name) => self.output.push_str(name),
            Expr::Binary(op, left, right) => {
                self.print(left);
                self.output.push(op.symbol());
                self.print(right);
            }
            Expr::Call(function, arg) => {
                self.output.push_str(function.name());
                self.output.push('(');
                self.print(arg);
                self.output.push(')');
            }
        }
    }

    fn print_float(&mut self, value: f64) {
        // Ensure finite floats print with a decimal point so the literal
        // reads as a float, while still round-tripping exactly.
        let s = value.to_string();
        self.output.push_str(&s);
        if value.is_finite() && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            self.output.push_str(".0");
        }
    }
}
