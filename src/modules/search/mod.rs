pub mod spotify_api;
