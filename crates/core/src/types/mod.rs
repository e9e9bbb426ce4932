//! Core types for the Sankalp portal.
//!
//! This module provides type-safe wrappers for the portal's domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use status::*;
