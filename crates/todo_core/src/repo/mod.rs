//! Persistence adapter between the controller and a key-value slot.
//!
//! # Responsibility
//! - Define the narrow load/save contract used by the controller.
//! - Keep JSON encoding and storage details out of the service layer.
//!
//! # Invariants
//! - This is the only place where todo state leaves the process.
//! - Adapter APIs never surface errors; failures degrade to "absent".

pub mod todo_repo;
