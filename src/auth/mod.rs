//! Auth module for portal sessions
//!
//! Wraps the login/registration flow and holds the authenticated user.
//! Durable token storage is deliberately absent.

mod session;

pub use session::Session;
