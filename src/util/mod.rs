//! Environment helpers shared across the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation, abort
//! handles, logging) from state and form logic so the core stays natively
//! testable.

pub mod abort;
pub mod logging;
pub mod nav;
pub mod storage;
