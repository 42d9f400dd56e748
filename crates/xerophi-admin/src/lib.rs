//! Xerophi Admin: interactive console for managing user records.
//!
//! The binary wires a [`config::Config`] to the two connection holders
//! from `xerophi-db`, then hands an [`context::AdminContext`] to the
//! [`menu`] loop, which dispatches to the [`commands`] handlers.

pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod menu;

pub use context::AdminContext;
pub use error::AdminError;
