//! HTTP server for the finquest advice engine
//!
//! Thin transport layer over the trained [`finquest_advice::Advisor`]: one
//! JSON advice endpoint plus health/readiness probes. All request handling
//! is stateless; the trained model is shared read-only via [`AppState`].

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;
