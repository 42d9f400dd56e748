//! Domain models for Xerophi.

pub mod user;
