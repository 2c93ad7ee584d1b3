//! HTTP boundary for the CP2K input-to-XML transformer.
//!
//! A thin request/response shim around `cp2k_xml::InputTransformer`: one
//! upload endpoint and one liveness probe, no further logic.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::ServiceError;
pub use state::AppState;
