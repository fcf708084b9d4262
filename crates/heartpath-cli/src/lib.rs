//! heartpath CLI library.
//!
//! This crate provides the command-line driver for the heartpath solver:
//! reading problem files, dispatching on the problem part, and formatting
//! results.

pub mod commands;
pub mod output;
