//! The PyRite language engine.
//!
//! This crate contains everything needed to execute PyRite scripts: the
//! [`syn`] module lexes and parses source text into a [`rite::Script`], the
//! [`exe::Interpreter`] walks the resulting tree, and the [`rite`] module
//! defines the runtime values, including the arbitrary-precision
//! [`rite::BigDecimal`] that underlies all numeric operations.

pub mod cnf;
pub mod ctx;
pub mod env;
pub mod err;
pub mod exe;
pub mod fnc;
pub mod rite;
pub mod syn;
