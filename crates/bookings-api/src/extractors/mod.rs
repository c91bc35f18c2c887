//! Custom Axum extractors.

pub mod visitor;

pub use visitor::Visitor;
