//! Ordered selector fallback tables for the hosted Qobuz player.
//!
//! Each table is ranked from site-specific markup (most likely current) down
//! to generic fallbacks. Resolution always takes the first match, so keeping
//! these as plain ordered lists means a markup change on the remote site is a
//! table edit, not a control-flow change.

/// Play/pause button candidates.
pub const PLAY_PAUSE_SELECTORS: &[&str] = &[
    // Qobuz-specific
    ".player__action-pause",
    ".player__action-play",
    ".pct-player-pause",
    ".pct-player-play",
    // Generic fallbacks
    "[data-testid=\"play-button\"]",
    ".play-button",
    ".pf-play-button",
    "button[aria-label*=\"play\"]",
    "button[aria-label*=\"pause\"]",
    ".player-controls button:first-child",
];

/// Next-track button candidates.
pub const NEXT_SELECTORS: &[&str] = &[
    // Qobuz-specific
    ".player__action-next",
    ".pct-player-next",
    // Generic fallbacks
    "[data-testid=\"next-button\"]",
    ".next-button",
    ".pf-next-button",
    "button[aria-label*=\"next\"]",
    ".player-controls button:last-child",
];

/// Previous-track button candidates.
pub const PREVIOUS_SELECTORS: &[&str] = &[
    // Qobuz-specific
    ".player__action-previous",
    ".pct-player-prev",
    // Generic fallbacks
    "[data-testid=\"previous-button\"]",
    ".previous-button",
    ".pf-previous-button",
    "button[aria-label*=\"previous\"]",
    ".player-controls button:nth-child(1)",
];

/// Track title candidates.
pub const TITLE_SELECTORS: &[&str] = &[
    ".player__track-name",
    ".player__track-overflow",
    ".track-title",
    ".current-track-title",
    "[data-testid=\"track-title\"]",
    ".player-track-title",
];

/// Artist candidates. On Qobuz the artist usually lives in the album link.
pub const ARTIST_SELECTORS: &[&str] = &[
    ".player__track-album a",
    ".track-artist",
    ".current-track-artist",
    "[data-testid=\"track-artist\"]",
    ".player-track-artist",
];

/// Album candidates.
pub const ALBUM_SELECTORS: &[&str] = &[
    ".player__track-album",
    ".track-album",
    ".current-track-album",
    "[data-testid=\"track-album\"]",
    ".player-track-album",
];

/// Cover-art candidates. Either an `<img>` or an element with a
/// `background-image` inline style.
pub const COVER_SELECTORS: &[&str] = &[
    ".player__track-cover img",
    ".player__track-cover [style*=\"background-image\"]",
    ".current-track-cover img",
    ".track-cover img",
    "[data-testid=\"track-cover\"] img",
];

/// Region of the page the bridge ships back for extraction. Falls back to the
/// whole body when no player container matches.
pub const PLAYER_REGION_SELECTORS: &[&str] = &[
    ".player",
    ".player__container",
    "[class*=\"player-bar\"]",
    "footer",
];
