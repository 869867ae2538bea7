use crate::core::models::{PlayerState, PlayerStatus};
use crate::core::traits::PlayerBridge;
use anyhow::{Context, Result, bail};
use log::debug;
use std::process::Command;

const PLAYER_APP: &str = "Spotify";

/// Drives the Spotify desktop app through `osascript`.
///
/// Each call spawns one osascript process; there is nothing to connect to or
/// keep alive between commands.
pub struct AppleScriptBridge;

impl AppleScriptBridge {
    pub fn new() -> Self {
        Self
    }

    /// iTerm version string, for the artwork capability gate.
    pub fn iterm_version(&self) -> Result<String> {
        self.run("version of application \"iTerm\"")
    }

    fn run(&self, script: &str) -> Result<String> {
        debug!("osascript: {script}");
        let output = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output()
            .context("failed to run osascript")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("osascript failed: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn tell(&self, command: &str) -> Result<String> {
        self.run(&format!("tell application \"{PLAYER_APP}\" to {command}"))
    }
}

impl Default for AppleScriptBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerBridge for AppleScriptBridge {
    fn player_status(&self) -> Result<PlayerStatus> {
        let script = format!(
            "tell application \"{PLAYER_APP}\"\n\
             (player state as string) & linefeed & \
             artist of current track & linefeed & \
             name of current track & linefeed & \
             album of current track & linefeed & \
             (duration of current track as string) & linefeed & \
             (player position as string)\n\
             end tell"
        );
        let raw = self.run(&script)?;
        parse_status(&raw)
    }

    fn play(&self) -> Result<()> {
        self.tell("play")?;
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.tell("pause")?;
        Ok(())
    }

    fn next_track(&self) -> Result<()> {
        self.tell("next track")?;
        Ok(())
    }

    fn previous_track(&self) -> Result<()> {
        self.tell("previous track")?;
        Ok(())
    }

    fn volume(&self) -> Result<u8> {
        let raw = self.tell("sound volume")?;
        let level: u8 = raw
            .parse()
            .with_context(|| format!("unexpected sound volume: {raw}"))?;
        Ok(level.min(100))
    }

    fn set_volume(&self, level: u8) -> Result<()> {
        self.tell(&format!("set sound volume to {level}"))?;
        Ok(())
    }

    fn toggle_shuffle(&self) -> Result<bool> {
        let enabled = self.tell("shuffling")? == "true";
        let next = !enabled;
        self.tell(&format!("set shuffling to {next}"))?;
        Ok(next)
    }

    fn toggle_repeat(&self) -> Result<bool> {
        let enabled = self.tell("repeating")? == "true";
        let next = !enabled;
        self.tell(&format!("set repeating to {next}"))?;
        Ok(next)
    }

    fn artwork_url(&self) -> Result<String> {
        let url = self.tell("artwork url of current track")?;
        if url.is_empty() {
            bail!("current track has no artwork url");
        }
        Ok(url)
    }
}

/// Parse the six-line status payload the status script produces.
///
/// Spotify reports the track duration in milliseconds and the player
/// position as fractional seconds.
fn parse_status(raw: &str) -> Result<PlayerStatus> {
    let lines: Vec<&str> = raw.lines().collect();
    let &[state, artist, track, album, duration, position] = lines.as_slice() else {
        bail!("unexpected status payload: {raw:?}");
    };

    let state: PlayerState = state.parse()?;
    let duration_ms: f64 = duration
        .parse()
        .with_context(|| format!("unexpected track duration: {duration}"))?;
    let position_secs: f64 = position
        .parse()
        .with_context(|| format!("unexpected player position: {position}"))?;

    Ok(PlayerStatus::new(
        state,
        artist.to_string(),
        track.to_string(),
        album.to_string(),
        (duration_ms / 1000.0).round() as u64,
        position_secs.round() as u64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_payload_parses_into_a_snapshot() {
        let raw = "playing\nPink Floyd\nTime\nThe Dark Side of the Moon\n413000\n43.52";
        let status = parse_status(raw).unwrap();

        assert_eq!(status.state, PlayerState::Playing);
        assert_eq!(status.artist, "Pink Floyd");
        assert_eq!(status.track, "Time");
        assert_eq!(status.album, "The Dark Side of the Moon");
        assert_eq!(status.duration_secs, 413);
        assert_eq!(status.position_secs, 44);
        assert_eq!(status.position, "0:44");
        assert_eq!(status.duration, "6:53");
    }

    #[test]
    fn paused_state_is_preserved() {
        let raw = "paused\nQueen\nUnder Pressure\nHot Space\n248000\n0.0";
        let status = parse_status(raw).unwrap();
        assert_eq!(status.state, PlayerState::Paused);
        assert_eq!(status.position_secs, 0);
    }

    #[test]
    fn short_payloads_are_rejected() {
        assert!(parse_status("playing\nonly\nfour\nlines").is_err());
    }

    #[test]
    fn extra_lines_are_rejected() {
        let raw = "playing\na\nb\nc\n1000\n1.0\nextra";
        assert!(parse_status(raw).is_err());
    }

    #[test]
    fn unknown_state_is_rejected() {
        let raw = "loading\na\nb\nc\n1000\n1.0";
        assert!(parse_status(raw).is_err());
    }

    #[test]
    fn non_numeric_duration_is_rejected() {
        let raw = "playing\na\nb\nc\nlong\n1.0";
        assert!(parse_status(raw).is_err());
    }
}
