//! Networking modules for the crowdfunding REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the configured wrapper (auth header, abort wiring, the global
//! 401 policy); the `api_*` modules group endpoint calls by area; `types`
//! defines the wire DTOs and `error` the user-facing error taxonomy.

pub mod api;
pub mod api_auth;
pub mod api_categories;
pub mod api_comments;
pub mod api_projects;
pub mod api_tags;
pub mod error;
pub mod types;
