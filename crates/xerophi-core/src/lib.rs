//! Xerophi Core: user domain model, error taxonomy and the repository
//! trait shared by the database layer and the admin console.

pub mod error;
pub mod models;
pub mod repository;
