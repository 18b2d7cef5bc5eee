mod client;
pub mod models;
mod torn_error;

pub use client::{TornClient, DEFAULT_BASE_URL};
pub use torn_error::TornError;
