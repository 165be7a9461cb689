//! Integration tests for the expression tree pipeline.
//!
//! Tests for construction, evaluation, copying, and constant folding
//! through the public API.

mod construct;
mod copy;
mod fold;
