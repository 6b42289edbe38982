//! Injected page bridge.
//!
//! The script below is attached to the main webview as an initialization
//! script. It is deliberately dumb: resolve a click target from the rendered
//! selector tables, and ship the player region's markup back to the shell,
//! which owns extraction and change detection. The selector tables are
//! spliced in as JSON at startup so the script and the Rust extractor can
//! never disagree about ordering.

use thiserror::Error;

use super::selectors::{
    NEXT_SELECTORS, PLAYER_REGION_SELECTORS, PLAY_PAUSE_SELECTORS, PREVIOUS_SELECTORS,
};

/// Collapse window for the mutation-observer/poll report signal.
pub const REPORT_DEBOUNCE_MS: u64 = 250;
/// Backstop poll for mutations the observer missed.
pub const FALLBACK_POLL_MS: u64 = 10_000;
/// Settle delay before acting on a relayed command.
pub const DOM_READY_DELAY_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to encode selector table: {0}")]
    Encode(#[from] serde_json::Error),
}

const PLAYER_BRIDGE_JS: &str = r#"
(() => {
  if (window.__qobuxBridge) {
    return true;
  }

  const PLAY_PAUSE_SELECTORS = __QOBUX_PLAY_PAUSE__;
  const NEXT_SELECTORS = __QOBUX_NEXT__;
  const PREVIOUS_SELECTORS = __QOBUX_PREVIOUS__;
  const REGION_SELECTORS = __QOBUX_REGION__;
  const REPORT_DEBOUNCE_MS = __QOBUX_REPORT_DEBOUNCE_MS__;
  const FALLBACK_POLL_MS = __QOBUX_FALLBACK_POLL_MS__;
  const DOM_READY_DELAY_MS = __QOBUX_DOM_READY_DELAY_MS__;

  const tauri = window.__TAURI__ || {};
  const invoke = tauri.core ? tauri.core.invoke : null;
  const listen = tauri.event ? tauri.event.listen : null;

  const clickFirst = (selectors) => {
    for (const selector of selectors) {
      const el = document.querySelector(selector);
      if (el) {
        el.click();
        return true;
      }
    }
    return false;
  };

  const applyCommand = (command) => {
    switch (command) {
      case "playpause":
        clickFirst(PLAY_PAUSE_SELECTORS);
        break;
      case "next":
        clickFirst(NEXT_SELECTORS);
        break;
      case "previous":
        clickFirst(PREVIOUS_SELECTORS);
        break;
      default:
        break;
    }
  };

  const playerRegion = () => {
    for (const selector of REGION_SELECTORS) {
      const el = document.querySelector(selector);
      if (el) return el;
    }
    return document.body;
  };

  const report = () => {
    if (!invoke) return;
    const region = playerRegion();
    if (!region) return;
    invoke("report_player_markup", { html: region.outerHTML }).catch(() => {});
  };

  let reportTimer = null;
  const scheduleReport = () => {
    if (reportTimer) clearTimeout(reportTimer);
    reportTimer = setTimeout(() => {
      reportTimer = null;
      report();
    }, REPORT_DEBOUNCE_MS);
  };

  const setMetadata = (meta) => {
    if (!meta || !("mediaSession" in navigator) || typeof MediaMetadata === "undefined") {
      return;
    }
    const artwork = meta.cover_url
      ? [{ src: meta.cover_url, sizes: "512x512", type: "image/jpeg" }]
      : undefined;
    try {
      navigator.mediaSession.metadata = new MediaMetadata({
        title: meta.title || "",
        artist: meta.artist || "",
        album: meta.album || "",
        artwork,
      });
    } catch (_err) {}
  };

  const registerMediaSession = () => {
    if (!("mediaSession" in navigator)) return;
    const session = navigator.mediaSession;
    const handlers = [
      ["play", () => clickFirst(PLAY_PAUSE_SELECTORS)],
      ["pause", () => clickFirst(PLAY_PAUSE_SELECTORS)],
      ["nexttrack", () => {
        clickFirst(NEXT_SELECTORS);
        scheduleReport();
      }],
      ["previoustrack", () => {
        clickFirst(PREVIOUS_SELECTORS);
        scheduleReport();
      }],
    ];
    for (const [action, handler] of handlers) {
      try {
        session.setActionHandler(action, handler);
      } catch (_err) {}
    }
  };

  const start = () => {
    if (listen) {
      listen("media-command", (event) => {
        setTimeout(() => applyCommand(event.payload), DOM_READY_DELAY_MS);
      });
      listen("request-track-report", () => scheduleReport());
      listen("track-metadata", (event) => setMetadata(event.payload));
    }

    registerMediaSession();

    const observer = new MutationObserver(scheduleReport);
    observer.observe(document.body, {
      childList: true,
      subtree: true,
      characterData: true,
    });
    setInterval(scheduleReport, FALLBACK_POLL_MS);
    scheduleReport();
  };

  if (document.readyState === "loading") {
    document.addEventListener("DOMContentLoaded", start);
  } else {
    start();
  }

  window.__qobuxBridge = { applyCommand, scheduleReport };
  return true;
})();
"#;

/// Render the bridge script with the selector tables and timing constants
/// spliced in.
pub fn render_bridge_script() -> Result<String, BridgeError> {
    let script = PLAYER_BRIDGE_JS
        .replace(
            "__QOBUX_PLAY_PAUSE__",
            &serde_json::to_string(PLAY_PAUSE_SELECTORS)?,
        )
        .replace("__QOBUX_NEXT__", &serde_json::to_string(NEXT_SELECTORS)?)
        .replace(
            "__QOBUX_PREVIOUS__",
            &serde_json::to_string(PREVIOUS_SELECTORS)?,
        )
        .replace(
            "__QOBUX_REGION__",
            &serde_json::to_string(PLAYER_REGION_SELECTORS)?,
        )
        .replace("__QOBUX_REPORT_DEBOUNCE_MS__", &REPORT_DEBOUNCE_MS.to_string())
        .replace("__QOBUX_FALLBACK_POLL_MS__", &FALLBACK_POLL_MS.to_string())
        .replace("__QOBUX_DOM_READY_DELAY_MS__", &DOM_READY_DELAY_MS.to_string());
    Ok(script)
}
