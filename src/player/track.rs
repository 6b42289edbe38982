use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "Unknown Track";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Now-playing snapshot extracted from the hosted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl TrackInfo {
    /// Notification body, "Artist - Title".
    pub fn notification_body(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    /// True when title extraction failed and we only have the sentinel.
    pub fn has_sentinel_title(&self) -> bool {
        self.title == UNKNOWN_TITLE
    }

    fn empty() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            cover_url: None,
        }
    }
}

/// Edge-triggered change detector over the (title, artist, album) tuple.
///
/// The stored tuple is only overwritten when a change is reported, so a failed
/// extraction (sentinel title) never clobbers the last good snapshot.
#[derive(Debug)]
pub struct TrackChangeDetector {
    last: TrackInfo,
}

impl TrackChangeDetector {
    pub fn new() -> Self {
        Self {
            last: TrackInfo::empty(),
        }
    }

    /// Compare a fresh snapshot against the last observed one. Returns the
    /// snapshot exactly when the tuple changed and the title is real; cover
    /// art alone never counts as a change.
    pub fn observe(&mut self, info: TrackInfo) -> Option<TrackInfo> {
        let changed = info.title != self.last.title
            || info.artist != self.last.artist
            || info.album != self.last.album;

        if changed && !info.has_sentinel_title() {
            self.last = info.clone();
            return Some(info);
        }
        None
    }

    pub fn last(&self) -> &TrackInfo {
        &self.last
    }
}

impl Default for TrackChangeDetector {
    fn default() -> Self {
        Self::new()
    }
}
