//! Browser console logging bootstrap.
//!
//! Call once from the hydrate entry before constructing the session or the
//! API wrapper so request logging and panic messages reach the console.

/// Install the console logger and panic hook. No-op outside the browser.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
