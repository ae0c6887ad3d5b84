//! Core types for the finquest advice engine
//!
//! This crate provides the domain types shared across all other crates:
//! - The closed set of financial topic categories
//! - The slot set extracted from a query (`QueryContext`)
//! - The embedded training corpus
//! - Error types

pub mod category;
pub mod context;
pub mod corpus;
pub mod error;

pub use category::Category;
pub use context::QueryContext;
pub use corpus::{training_corpus, TrainingExample};
pub use error::TrainError;
