//! Web layer for the station arrivals server.
//!
//! Provides HTTP endpoints for submitting line schedules and querying the
//! next simultaneous arrival.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
