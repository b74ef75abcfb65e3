
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn contacts_endpoint() -> String {
    format!("{}/api/contacts", get_backend_url())
}

/// Distance below the top of the viewport at which a section counts as active.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Height of the fixed navigation bar, subtracted when scrolling to an anchor.
pub const ANCHOR_OFFSET: f64 = 80.0;

pub const COUNTDOWN_SECONDS: u32 = 10;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;
pub const LIFTOFF_HOLD_MS: u32 = 3_000;

pub const TOAST_DURATION_MS: u32 = 5_000;
