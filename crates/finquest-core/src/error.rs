//! Error types

use thiserror::Error;

use crate::Category;

/// Startup-time training failures.
///
/// These are fatal configuration errors: the process must refuse to start
/// rather than serve an unclassifiable model. No per-request error exists in
/// the core — every input string produces some advice document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainError {
    #[error("training corpus is empty")]
    EmptyCorpus,

    #[error("training corpus contains a single class ({0}); at least two are required")]
    SingleClass(Category),
}
