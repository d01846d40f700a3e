//! Application layer
//!
//! This layer contains use cases that orchestrate domain logic to implement
//! application-specific workflows. Use cases coordinate the document store,
//! the PDF generator and the submission endpoint to fulfill editor requests.

pub mod editor;
