//! Business logic services for the portal.
//!
//! - `auth` - Login, registration and profile updates

pub mod auth;
