//! Inline cover art for terminals that can draw it.
//!
//! Fire and forget: the render runs on a detached thread and never
//! propagates errors back to the printer. The status lines already written
//! are the only guaranteed output; a missing capability, an old terminal, or
//! a failed fetch simply leaves the artwork out.

use crate::core::traits::PlayerBridge;
use crate::modules::player::applescript::AppleScriptBridge;
use crate::utils::{release_component, version_gt};
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{self, Read, Write};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// First iTerm release whose inline-image protocol we rely on.
const MIN_ITERM_VERSION: &str = "2.9.0";

/// Display height of the rendered artwork, in terminal cells.
const ARTWORK_HEIGHT: u32 = 8;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Images larger than this are cut off rather than buffered endlessly.
const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

static PENDING: Mutex<Option<JoinHandle<()>>> = Mutex::new(None);

/// Kick off a best-effort inline render of the current track's cover art.
///
/// Returns immediately. When the hosting terminal does not support inline
/// images nothing is spawned at all.
pub fn render_current_artwork() {
    let term_program = std::env::var("TERM_PROGRAM").ok();
    if !supports_inline_images(term_program.as_deref()) {
        return;
    }

    let handle = thread::spawn(|| {
        let _ = try_render();
    });
    if let Ok(mut slot) = PENDING.lock() {
        *slot = Some(handle);
    }
}

/// Wait for an in-flight render, if any. Called once before process exit so
/// a successful fetch actually reaches the terminal; the printer itself
/// never blocks on it.
pub fn drain() {
    let handle = match PENDING.lock() {
        Ok(mut slot) => slot.take(),
        Err(_) => None,
    };
    if let Some(handle) = handle {
        let _ = handle.join();
    }
}

/// Whether the hosting terminal can draw OSC 1337 inline images.
fn supports_inline_images(term_program: Option<&str>) -> bool {
    matches!(term_program, Some("iTerm.app"))
}

fn try_render() -> Result<()> {
    let bridge = AppleScriptBridge::new();

    let version = bridge.iterm_version()?;
    if !version_gt(release_component(&version), MIN_ITERM_VERSION) {
        return Ok(());
    }

    let url = bridge.artwork_url()?;
    let image = fetch_artwork(&url)?;

    println!();
    let mut stdout = io::stdout().lock();
    write_inline_image(&mut stdout, &image, ARTWORK_HEIGHT)?;
    Ok(())
}

fn fetch_artwork(url: &str) -> Result<Vec<u8>> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let response = agent
        .get(url)
        .call()
        .with_context(|| format!("failed to fetch artwork from {url}"))?;

    let mut image = Vec::new();
    response
        .into_reader()
        .take(MAX_IMAGE_BYTES)
        .read_to_end(&mut image)
        .context("failed to read artwork body")?;
    Ok(image)
}

/// Write an image using iTerm's OSC 1337 `File` escape.
fn write_inline_image(out: &mut impl Write, image: &[u8], height_cells: u32) -> io::Result<()> {
    let payload = STANDARD.encode(image);
    write!(
        out,
        "\x1b]1337;File=inline=1;height={height_cells}:{payload}\x07"
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── terminal detection ────────────────────────────────────────────────────

    #[test]
    fn iterm_supports_inline_images() {
        assert!(supports_inline_images(Some("iTerm.app")));
    }

    #[test]
    fn other_terminals_do_not() {
        assert!(!supports_inline_images(Some("Apple_Terminal")));
        assert!(!supports_inline_images(Some("vscode")));
        assert!(!supports_inline_images(Some("")));
        assert!(!supports_inline_images(None));
    }

    // ── version gate ──────────────────────────────────────────────────────────

    #[test]
    fn recent_versions_pass_the_gate() {
        assert!(version_gt(release_component("3.5.0"), MIN_ITERM_VERSION));
    }

    #[test]
    fn old_versions_fail_the_gate() {
        assert!(!version_gt(release_component("2.8.0"), MIN_ITERM_VERSION));
        assert!(!version_gt(release_component("2.9.0"), MIN_ITERM_VERSION));
    }

    #[test]
    fn beta_suffixes_are_stripped_before_comparing() {
        assert!(version_gt(release_component("3.1.0beta3"), MIN_ITERM_VERSION));
    }

    // ── escape sequence ───────────────────────────────────────────────────────

    #[test]
    fn inline_image_escape_has_the_expected_shape() {
        let mut out = Vec::new();
        write_inline_image(&mut out, b"png-bytes", 8).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b]1337;File=inline=1;height=8:"));
        assert!(written.contains(&STANDARD.encode(b"png-bytes")));
        assert!(written.contains('\x07'));
    }

    #[test]
    fn inline_image_escape_encodes_empty_payloads() {
        let mut out = Vec::new();
        write_inline_image(&mut out, b"", 8).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(":\x07"));
    }
}
