//! Caller-facing input forms validated before reaching the services.

pub mod categories;
