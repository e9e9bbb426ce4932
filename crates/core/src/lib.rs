//! Sankalp Core - Shared types library.
//!
//! This crate provides the types shared by the Sankalp components:
//! - `portal` - Marketing site and course registration portal
//! - `cli` - Operator command-line tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP clients. The
//! course backend owns all persistence; these types describe what the
//! portal exchanges with it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, fees, emails, roles and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
