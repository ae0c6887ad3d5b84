//! Advice rendering and the query-to-advice pipeline
//!
//! Maps a (category, extracted slots) pair to a personalized markdown advice
//! document, and wires the NLU components into the end-to-end [`Advisor`]:
//! train once at startup, then a pure, stateless transform per request.

pub mod advisor;
pub mod render;
pub mod templates;

pub use advisor::{Advisor, AdvisorOptions};
pub use finquest_nlu::ClassifierOptions;
pub use render::render;
pub use templates::ONBOARDING;
