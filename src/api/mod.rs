//! API module for training portal interactions

mod auth;
mod client;
mod departments;
mod trainings;
mod user_trainings;
mod users;

pub use client::{ApiError, PortalClient};
