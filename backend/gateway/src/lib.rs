//! geoforge HTTP gateway
//!
//! Exposes `POST /api/analyze`: origin checks, image upload, and the
//! two-stage analysis pipeline.

pub mod analyze;
pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, GatewayState};
