//! Freshline application: mock repositories, session state and configuration.

pub mod config;
pub mod context;
pub mod domain;
pub mod fixtures;
pub mod observability;
pub mod preferences;
