use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::selectors::{
    ALBUM_SELECTORS, ARTIST_SELECTORS, COVER_SELECTORS, TITLE_SELECTORS,
};
use super::track::{TrackInfo, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TITLE};

static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| parse_table(TITLE_SELECTORS));
static ARTIST: Lazy<Vec<Selector>> = Lazy::new(|| parse_table(ARTIST_SELECTORS));
static ALBUM: Lazy<Vec<Selector>> = Lazy::new(|| parse_table(ALBUM_SELECTORS));
static COVER: Lazy<Vec<Selector>> = Lazy::new(|| parse_table(COVER_SELECTORS));

// Matches url('...'), url("...") and bare url(...) in an inline style.
static BACKGROUND_IMAGE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"url\(['"]?([^'")]+)['"]?\)"#).unwrap());

fn parse_table(table: &[&str]) -> Vec<Selector> {
    table
        .iter()
        .filter_map(|raw| match Selector::parse(raw) {
            Ok(selector) => Some(selector),
            Err(e) => {
                log::warn!("skipping unparsable selector {:?}: {:?}", raw, e);
                None
            }
        })
        .collect()
}

/// First non-empty text content matched by an ordered selector table.
fn first_text(doc: &Html, table: &[Selector]) -> Option<String> {
    for selector in table {
        if let Some(element) = doc.select(selector).next() {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn cover_url_from(element: ElementRef<'_>) -> Option<String> {
    if element.value().name().eq_ignore_ascii_case("img") {
        return element
            .value()
            .attr("src")
            .filter(|src| !src.is_empty())
            .map(str::to_string);
    }
    let style = element.value().attr("style")?;
    BACKGROUND_IMAGE_URL
        .captures(style)
        .map(|caps| caps[1].to_string())
}

fn first_cover(doc: &Html) -> Option<String> {
    for selector in COVER.iter() {
        if let Some(url) = doc.select(selector).next().and_then(cover_url_from) {
            return Some(url);
        }
    }
    None
}

/// Extract a now-playing snapshot from player markup shipped over by the
/// bridge. Every field degrades to its sentinel independently; a page whose
/// markup drifted out from under the tables yields an all-sentinel snapshot
/// rather than an error.
pub fn extract_track_info(html: &str) -> TrackInfo {
    let doc = Html::parse_document(html);

    let info = TrackInfo {
        title: first_text(&doc, &TITLE).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        artist: first_text(&doc, &ARTIST).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        album: first_text(&doc, &ALBUM).unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        cover_url: first_cover(&doc),
    };

    if info.has_sentinel_title() {
        log::debug!("no title matched in reported markup ({} bytes)", html.len());
    }
    info
}
