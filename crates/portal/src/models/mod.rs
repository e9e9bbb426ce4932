//! Domain models for the portal.

pub mod session;

pub use session::{Flash, FlashKind, SessionUser, keys as session_keys};
