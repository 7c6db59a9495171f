//! Background music toggle and volume.

use serde::Serialize;

use crate::features::effects::Effects;

/// Volume used when nothing is configured.
pub const DEFAULT_VOLUME: f64 = 0.3;

/// Volume change per key press.
pub const VOLUME_STEP: f64 = 0.05;

/// Background music state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Music {
    playing: bool,
    volume: f64,
}

impl Default for Music {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl Music {
    /// Stopped music at the given volume.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        Self {
            playing: false,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Whether music is switched on.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current volume (0.0 - 1.0).
    #[must_use]
    pub const fn volume(&self) -> f64 {
        self.volume
    }

    /// Switch music on or off.
    ///
    /// The flag flips even when the player refuses to start; the failure is
    /// logged by [`Effects`].
    pub fn toggle(&mut self, effects: &mut Effects) {
        if self.playing {
            effects.stop_music();
        } else {
            effects.start_music(self.volume);
        }
        self.playing = !self.playing;
    }

    /// Set the volume, clamped to 0.0 - 1.0.
    pub fn set_volume(&mut self, volume: f64, effects: &mut Effects) {
        let volume = volume.clamp(0.0, 1.0);
        if (volume - self.volume).abs() < f64::EPSILON {
            return;
        }

        self.volume = volume;
        if self.playing {
            effects.set_music_volume(volume);
        }
    }

    /// Nudge the volume by `delta`.
    pub fn adjust_volume(&mut self, delta: f64, effects: &mut Effects) {
        // Round to whole percent so repeated steps don't drift.
        let target = ((self.volume + delta) * 100.0).round() / 100.0;
        self.set_volume(target, effects);
    }

    /// Stop playback if running. Used on shutdown.
    pub fn stop(&mut self, effects: &mut Effects) {
        if self.playing {
            effects.stop_music();
            self.playing = false;
        }
    }
}
