//! View state: plain structs mutated by pure reducers, wrapped in an
//! `RwSignal` only at the integration edge. The async helpers in each
//! module are the thin seam between `net` and the reducers; everything
//! below them is natively testable.
//!
//! - `session`: token + current user, persistence, the 401 teardown
//! - `listing`: filters, paging, dedup, local ordering
//! - `detail`: one campaign, its similar strip, donate/rate feedback
//! - `comments`: client-side threading and the report flow
//! - `dashboard`: owned campaigns, donation history, cancellation
//! - `home`: the three curated homepage strips

pub mod comments;
pub mod dashboard;
pub mod detail;
pub mod home;
pub mod listing;
pub mod session;
