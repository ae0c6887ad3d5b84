//! Query understanding for the finquest advice engine
//!
//! Two independent paths over the same query text:
//! - classification: [`TfidfVectorizer`] + [`SoftmaxClassifier`], trained once
//!   at startup from the embedded corpus and immutable afterwards
//! - slot filling: [`ContextExtractor`], pure pattern scans that run on every
//!   request regardless of the predicted category

pub mod classifier;
pub mod extractor;
pub mod vectorizer;

pub use classifier::{ClassifierOptions, SoftmaxClassifier};
pub use extractor::ContextExtractor;
pub use vectorizer::TfidfVectorizer;
