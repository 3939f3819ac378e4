//! Nutrition Tracker Client Library
//!
//! Async access to the tracker backend plus the services behind the
//! progress, streak and onboarding screens.
//!
//! ## Architecture
//!
//! - Api: `TrackerApi` trait and its `reqwest` implementation
//! - Services: fetch, aggregate and apply the failure policy per screen
//! - Config/telemetry: layered configuration and tracing setup

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod telemetry;

pub use api::{ApiClient, TrackerApi};
pub use config::AppConfig;
pub use error::{ClientError, ClientResult};
pub use state::ClientState;
