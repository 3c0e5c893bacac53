//! # crowdfund-client
//!
//! Leptos + WASM browser client core for a crowdfunding platform: session
//! handling, the REST API wrapper, wire DTOs, form validation, and the
//! view state behind the campaign listing, campaign detail, comment
//! threads, the creator dashboard, and the homepage.
//!
//! All browser I/O (fetch, storage, navigation) sits behind the `hydrate`
//! feature; native builds compile the full decision core against inert
//! stubs, which is what the test suite runs. A thin page layer owns
//! routing and markup and drives this crate through [`state::session::Session`],
//! [`net::api::Api`], and the per-view state modules.

pub mod forms;
pub mod net;
pub mod state;
pub mod util;
