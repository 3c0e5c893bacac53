//! Client-side form drafts, validation, and wire-payload assembly.
//!
//! DESIGN
//! ======
//! Each form owns a plain draft struct and a `validate` that either yields
//! a ready-to-send payload or a per-field error map. Server-side validation
//! errors merge into the same map under the server's field names, so client
//! and server errors render identically.

pub mod campaign;
pub mod comment;
pub mod donate;
pub mod field_errors;
pub mod profile;
pub mod register;
pub mod report;
