//! Shared building blocks for the CRM workspace: tracing setup, health
//! payloads and pagination parameters.

pub mod types;
pub mod utils;
pub mod pagination;
