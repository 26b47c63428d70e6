//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog calls into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod catalog_service;
