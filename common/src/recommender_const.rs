//! Constants shared by the recommender state machines and the UI.

/// Modules per page, for both the primary and the ranked listing.
pub const PAGE_SIZE: u32 = 10;

pub const ECTS_MIN: u32 = 1;
pub const ECTS_MAX: u32 = 30;

pub const DIGITAL_SCORE_MIN: u32 = 0;
pub const DIGITAL_SCORE_MAX: u32 = 3;

/// Quiescence window for the previous-module search box.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Longest topic label shown in full on a chip.
pub const TOPIC_CHIP_MAX_LEN: usize = 20;

pub const MODULE_LANGUAGES: [&str; 3] = ["English", "German", "Other"];

/// Notices kept on screen before the oldest is dropped.
pub const MAX_NOTICES: usize = 5;

/// Page buttons shown on each side of the current page.
pub const PAGE_BUTTON_RADIUS: u32 = 2;
