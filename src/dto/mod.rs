//! Use-case commands and output projections.

pub mod categories;
