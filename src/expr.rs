//! Arithmetic expression trees.
//!
//! [`Expr`] is a closed sum type over four node variants. Composite nodes
//! own their children exclusively through `Box`, so dropping a node drops
//! its whole subtree exactly once. Trees are immutable after construction;
//! every transformation allocates a fresh tree.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A binary operator. Exactly four members; any other symbol is rejected
/// at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// Parses an operator from its symbol character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperator`] for anything outside `+ - * /`.
    pub const fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(Error::UnknownOperator(other)),
        }
    }

    /// Returns the single-character symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies this operator to two operands with IEEE 754 semantics.
    ///
    /// Division by zero yields an infinity or NaN, never a panic.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl TryFrom<char> for BinaryOp {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A callable function. Exactly two members; any other name is rejected
/// at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Function {
    /// Non-negative square root; NaN for negative input.
    Sqrt,
    /// Absolute value.
    Abs,
}

impl Function {
    /// Parses a function from its name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] for any name other than `sqrt`
    /// or `abs`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "sqrt" => Ok(Self::Sqrt),
            "abs" => Ok(Self::Abs),
            other => Err(Error::UnknownFunction(other.to_string())),
        }
    }

    /// Returns the name of this function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies this function to an argument with IEEE 754 semantics.
    #[must_use]
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Sqrt => arg.sqrt(),
            Self::Abs => arg.abs(),
        }
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expression tree node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Numeric literal like `42.0`.
    Number(f64),
    /// Named variable like `x`. Evaluates to `0.0`; there is no binding
    /// environment in this model.
    Variable(String),
    /// Binary operation like `1+2`, owning both operands.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// Function call like `sqrt(x)`, owning its argument.
    Call(Function, Box<Expr>),
}

impl Expr {
    /// Creates a number node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable node. Names are unconstrained.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operation node owning both children.
    #[must_use]
    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    /// Creates a function call node owning its argument.
    #[must_use]
    pub fn call(function: Function, arg: Self) -> Self {
        Self::Call(function, Box::new(arg))
    }

    /// Creates a binary operation node from a raw operator symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperator`] for symbols outside `+ - * /`.
    pub fn binary_from_symbol(symbol: char, left: Self, right: Self) -> Result<Self> {
        Ok(Self::binary(BinaryOp::from_symbol(symbol)?, left, right))
    }

    /// Creates a function call node from a raw function name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] for names other than `sqrt` or
    /// `abs`.
    pub fn call_named(name: &str, arg: Self) -> Result<Self> {
        Ok(Self::call(Function::from_name(name)?, arg))
    }

    /// Evaluates this tree to a number.
    ///
    /// Total for all well-formed trees. Variables evaluate to `0.0`;
    /// numeric edge cases (division by zero, square root of a negative)
    /// propagate as IEEE infinity/NaN rather than faulting.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Variable(_) => 0.0,
            Self::Binary(op, left, right) => op.apply(left.evaluate(), right.evaluate()),
            Self::Call(function, arg) => function.apply(arg.evaluate()),
        }
    }

    /// Returns true if this is a number literal.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if this is a variable.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns true if this is a binary operation.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_, _, _))
    }

    /// Returns true if this is a function call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Call(_, _))
    }

    /// Returns the numeric value, or None if not a number literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the variable name, or None if not a variable.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// A human-readable type name for this node.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Variable(_) => "variable",
            Self::Binary(_, _, _) => "binary",
            Self::Call(_, _) => "call",
        }
    }
}
