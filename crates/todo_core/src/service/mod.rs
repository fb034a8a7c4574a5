//! Core use-case services.
//!
//! # Responsibility
//! - Turn user events into list mutations and persistence calls.
//! - Keep presentation layers decoupled from storage details.

pub mod todo_service;
