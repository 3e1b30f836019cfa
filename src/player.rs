//! Playback state of the media player page

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Initial volume
pub const DEFAULT_VOLUME: f64 = 0.8;

/// Volume slider step
pub const VOLUME_STEP: f64 = 0.1;

/// A playlist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    pub duration: String,
    pub views: String,
}

/// The fixed playlist of the player page
pub fn sample_playlist() -> Vec<VideoEntry> {
    vec![
        VideoEntry {
            id: "1".to_string(),
            title: "Big Buck Bunny".to_string(),
            url: "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"
                .to_string(),
            thumbnail: "https://images.unsplash.com/photo-1516329901741-991f59171b4e?w=800&auto=format&fit=crop"
                .to_string(),
            duration: "10:35".to_string(),
            views: "2.4k".to_string(),
        },
        VideoEntry {
            id: "2".to_string(),
            title: "Elephant Dream".to_string(),
            url: "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4"
                .to_string(),
            thumbnail: "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=800&auto=format&fit=crop"
                .to_string(),
            duration: "8:22".to_string(),
            views: "1.8k".to_string(),
        },
    ]
}

/// Properties handed to the video player component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProps<'a> {
    pub url: &'a str,
    pub playing: bool,
    pub volume: f64,
    pub muted: bool,
    pub controls: bool,
}

/// Selection, play/pause, volume and mute over a fixed playlist
#[derive(Debug, Clone)]
pub struct PlayerController {
    playlist: Vec<VideoEntry>,
    current: usize,
    playing: bool,
    volume: f64,
    muted: bool,
}

impl PlayerController {
    /// Start paused on the first entry
    pub fn new(playlist: Vec<VideoEntry>) -> Result<Self> {
        if playlist.is_empty() {
            return Err(Error::EmptyPlaylist);
        }

        Ok(Self::initial(playlist))
    }

    /// Initial state over a non-empty playlist
    fn initial(playlist: Vec<VideoEntry>) -> Self {
        Self {
            playlist,
            current: 0,
            playing: false,
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }

    pub fn playlist(&self) -> &[VideoEntry] {
        &self.playlist
    }

    pub fn current(&self) -> &VideoEntry {
        &self.playlist[self.current]
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current().id == id
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Switch to the entry with `id`. The play state is left unchanged.
    pub fn select(&mut self, id: &str) -> Result<&VideoEntry> {
        let index = self
            .playlist
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| Error::not_found(format!("playlist entry '{}'", id)))?;

        self.current = index;
        debug!("Selected '{}'", self.playlist[index].title);
        Ok(&self.playlist[index])
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Set the volume, clamped to 0.0–1.0 and snapped to the slider step.
    /// NaN is ignored.
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        if !volume.is_nan() {
            let steps = (volume.clamp(0.0, 1.0) / VOLUME_STEP).round();
            self.volume = steps / 10.0;
        }
        self.volume
    }

    pub fn props(&self) -> PlayerProps<'_> {
        PlayerProps {
            url: &self.current().url,
            playing: self.playing,
            volume: self.volume,
            muted: self.muted,
            controls: true,
        }
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::initial(sample_playlist())
    }
}
