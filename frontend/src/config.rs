use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before a mounted section starts its entrance transition.
pub const REVEAL_DELAY_MS: u32 = 60;

/// Per-card entrance offsets.
pub const CARD_STAGGER_MS: u32 = 80;
pub const TIMELINE_STAGGER_MS: u32 = 50;

pub const MARQUEE_SECONDS: u32 = 22;
