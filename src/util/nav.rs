//! Hard-navigation helpers for cross-page redirects.
//!
//! Session teardown and primary-entity load failures leave the current page
//! entirely, so these go through `window.location` rather than in-app
//! routing.

/// Login entry point for unauthenticated redirects.
pub const LOGIN_PATH: &str = "/login";

/// Listing fallback when a campaign detail fails to load.
pub const PROJECTS_PATH: &str = "/projects";

/// Navigate the browser to `path`. No-op outside the browser.
pub fn redirect_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
