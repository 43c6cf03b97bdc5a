//! Shared vocabulary for the numex solver crates.
//!
//! This crate defines the pieces every solver family agrees on:
//!
//! - [`Function`] and [`OdeFunction`], the evaluator contracts a caller
//!   supplies to a solver. Evaluators may fail with a [`DomainError`], and
//!   solvers treat such failures exactly like non-finite samples.
//! - [`Report`], the canonical record every `solve` call returns: the
//!   solution (when one exists), a [`Status`], an append-only iteration
//!   trace, and final diagnostics.
//! - The outcome taxonomy: [`InputError`], [`NumericalFailure`], and
//!   [`DivergenceError`], all folded into [`Status`].
//!
//! Solvers never panic and never return `Err`; every outcome, including
//! malformed input, travels back to the caller inside a [`Report`].

mod function;
mod report;
mod status;

pub use function::{DomainError, Function, OdeFunction, TryFunction};
pub use report::Report;
pub use status::{DivergenceError, InputError, NumericalFailure, Status};
