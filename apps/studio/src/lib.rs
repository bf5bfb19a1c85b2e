//! Resume Studio — a single-document resume editor core.
//!
//! One normalized document, pure edit operations over it, interchangeable
//! page templates, a guarded AI text-assist boundary, and an export pipeline.
//! The binary wires these together; hosts embed the library directly.

pub mod analytics;
pub mod assist;
pub mod config;
pub mod editor;
pub mod export;
pub mod models;
pub mod render;
pub mod slots;
pub mod store;
