//! Category administration for the media catalogue.
//!
//! The crate exposes the `Category` aggregate and its validation rules, a
//! Diesel/SQLite repository implementing the category persistence port, and
//! the service functions that create, update, delete, fetch and list
//! categories.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
