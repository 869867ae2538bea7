//! Terminal feedback for every command.
//!
//! One print function per user-visible action. Everything goes to stdout and
//! nothing is returned to the caller; the only printer state is the terminal
//! itself.

use crate::core::models::{
    AlbumHit, ArtistHit, PlayerStatus, PlaylistHit, SearchResults, TrackHit,
};
use crate::modules::ui::{artwork, glyph, progress};
use colored::Colorize;

pub fn warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn error(message: &str) {
    println!("{}", message.red());
}

/// Print one line per search hit, dispatching on the kind that produced them.
pub fn print_search_results(results: &SearchResults) {
    match results {
        SearchResults::Albums(hits) => {
            for hit in hits {
                println!("{}", album_line(hit));
            }
        }
        SearchResults::Artists(hits) => {
            for hit in hits {
                println!("{}", artist_line(hit));
            }
        }
        SearchResults::Playlists(hits) => {
            for hit in hits {
                println!("{}", playlist_line(hit));
            }
        }
        SearchResults::Tracks(hits) => {
            for hit in hits {
                println!("{}", track_line(hit));
            }
        }
    }
}

fn album_line(hit: &AlbumHit) -> String {
    format!(
        "{}{}{}{}{}",
        format!("{}: ", hit.index).green(),
        "Album: ".blue(),
        hit.album.green(),
        " Artist: ".blue(),
        hit.artists.green(),
    )
}

fn artist_line(hit: &ArtistHit) -> String {
    format!(
        "{}{}{}{}{}",
        format!("{}: ", hit.index).green(),
        "Artist: ".blue(),
        hit.name.green(),
        " Followers: ".blue(),
        hit.followers.to_string().green(),
    )
}

fn playlist_line(hit: &PlaylistHit) -> String {
    format!(
        "{}{}{}{}{}",
        format!("{}: ", hit.index).green(),
        "Playlist: ".blue(),
        hit.name.green(),
        " Tracks: ".blue(),
        hit.tracks.to_string().green(),
    )
}

fn track_line(hit: &TrackHit) -> String {
    format!(
        "{}{}{}{}{}{}{}",
        format!("{}: ", hit.index).green(),
        "Track: ".blue(),
        format!("{} ({})", hit.track, hit.duration).green(),
        " Artist: ".blue(),
        hit.artists.green(),
        " Album: ".blue(),
        hit.album.green(),
    )
}

/// Print the artist/track/album block, the progress line, and kick off the
/// best-effort artwork render.
pub fn print_player_status(status: &PlayerStatus) {
    println!("{}", glyph::emojify(&artist_status_line(status)));
    println!("{}", glyph::emojify(&track_status_line(status)));
    println!("{}", glyph::emojify(&album_status_line(status)));
    println!();
    print_duration_progress(status);
    artwork::render_current_artwork();
}

fn artist_status_line(status: &PlayerStatus) -> String {
    format!(":microphone:  {} {}", "Artist:".green(), status.artist.green())
}

fn track_status_line(status: &PlayerStatus) -> String {
    format!(":musical_score:  {} {}", "Track:".green(), status.track.green())
}

fn album_status_line(status: &PlayerStatus) -> String {
    format!(":cd:  {} {}", "Album:".green(), status.album.green())
}

fn print_duration_progress(status: &PlayerStatus) {
    println!("{}", glyph::emojify(&duration_progress_line(status)));
    println!();
}

fn duration_progress_line(status: &PlayerStatus) -> String {
    let button = if status.state.is_playing() {
        ":arrow_forward:"
    } else {
        ":double_vertical_bar:"
    };
    let bar = progress::render_bar(
        status.position_secs,
        status.duration_secs,
        progress::BAR_WIDTH,
    );
    format!(
        "{}   {} [{}] {} of {}",
        button, status.state, bar, status.position, status.duration
    )
}

pub fn print_next(status: &PlayerStatus) {
    let line = format!(
        ":fast_forward:  Playing next track: {} :musical_score:",
        status.track.green()
    );
    println!("{}", glyph::emojify(&line));
    println!();
    print_player_status(status);
}

pub fn print_previous(status: &PlayerStatus) {
    let line = format!(
        ":rewind:  Playing previous track: {} :musical_score:",
        status.track.green()
    );
    println!("{}", glyph::emojify(&line));
    println!();
    print_player_status(status);
}

pub fn print_volume(level: u8) {
    println!("{}", volume_line(level));
    println!();
}

fn volume_line(level: u8) -> String {
    let bar = progress::render_bar(u64::from(level), 100, progress::BAR_WIDTH);
    format!("Volume: [{}] {}", bar, level.to_string().green())
}

pub fn print_mute(level: u8) {
    println!("{}", glyph::emojify(":no_bell:  Spotify muted."));
    print_volume(level);
}

pub fn print_unmute(level: u8) {
    println!("{}", glyph::emojify(":bell:  Spotify unmuted."));
    print_volume(level);
}

pub fn print_set_volume(level: u8) {
    println!("{}", glyph::emojify(&format!(":headphones:  Volume set to {level}")));
    print_volume(level);
}

pub fn print_volume_increase(change: u8, level: u8) {
    println!("{}", glyph::emojify(&format!(":speaker:  Volume increased by {change}")));
    print_volume(level);
}

pub fn print_volume_decrease(change: u8, level: u8) {
    println!("{}", glyph::emojify(&format!(":speaker:  Volume decreased by {change}")));
    print_volume(level);
}

pub fn print_toggle_shuffle(enabled: bool) {
    println!("{}", glyph::emojify(&toggle_line(":twisted_rightwards_arrows:", "Shuffle", enabled)));
}

pub fn print_toggle_repeat(enabled: bool) {
    println!("{}", glyph::emojify(&toggle_line(":repeat:", "Repeat", enabled)));
}

fn toggle_line(shortcode: &str, name: &str, enabled: bool) -> String {
    let description = if enabled {
        "turned ON.".green()
    } else {
        "turned OFF.".red()
    };
    format!("{}  {} {}", shortcode, name, description)
}

pub fn print_config() {
    println!("{}", "Config set!".green());
}
