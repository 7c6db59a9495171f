//! Audio and notification side effects.
//!
//! The timer state machine never plays sounds or shows notifications
//! itself. It reports a [`Completion`] and [`Effects`] turns that into calls
//! on two injected capabilities, [`MediaPlayer`] and [`Notifier`].
//!
//! Effects are fire-and-forget: every failure is logged and dropped, and
//! nothing here can alter session state.

mod notify;
mod player;

pub use notify::{DesktopNotifier, NullNotifier};
pub use player::{CommandPlayer, SilentPlayer};

use crate::config::Config;
use crate::error::StudyTimerError;
use crate::features::focus::{Completion, SoundCue};

/// Something that can play remote audio.
#[cfg_attr(test, mockall::automock)]
pub trait MediaPlayer {
    /// Play a short clip once.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play_clip(&mut self, url: &str) -> Result<(), StudyTimerError>;

    /// Start a looping background stream, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn start_stream(&mut self, url: &str, volume: f64) -> Result<(), StudyTimerError>;

    /// Stop the background stream, if any.
    fn stop_stream(&mut self);

    /// Change the background stream volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the player rejected the change.
    fn set_volume(&mut self, volume: f64) -> Result<(), StudyTimerError>;
}

/// Something that can show a user-facing notification.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, title: &str, body: &str) -> Result<(), StudyTimerError>;
}

/// Dispatches timer events to the audio and notification capabilities.
pub struct Effects {
    player: Box<dyn MediaPlayer>,
    notifier: Box<dyn Notifier>,
    bell_url: String,
    chime_url: String,
    music_url: String,
    sound_effects: bool,
    desktop_notifications: bool,
}

impl Effects {
    /// Build effects backed by the configured player and desktop notifications.
    ///
    /// With `quiet`, both capabilities are replaced by no-ops.
    #[must_use]
    pub fn from_config(config: &Config, quiet: bool) -> Self {
        if quiet {
            return Self::with_capabilities(config, Box::new(SilentPlayer), Box::new(NullNotifier));
        }

        Self::with_capabilities(
            config,
            Box::new(CommandPlayer::from_config(&config.audio)),
            Box::new(DesktopNotifier::default()),
        )
    }

    /// Build effects around explicit capabilities.
    #[must_use]
    pub fn with_capabilities(
        config: &Config,
        player: Box<dyn MediaPlayer>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            player,
            notifier,
            bell_url: config.audio.focus_bell_url.clone(),
            chime_url: config.audio.break_chime_url.clone(),
            music_url: config.audio.music_url.clone(),
            sound_effects: config.audio.sound_effects,
            desktop_notifications: config.timer.desktop_notifications,
        }
    }

    /// Play the cue and show a notification for a natural expiry.
    pub fn announce(&mut self, completion: Completion) {
        tracing::info!(?completion, "countdown expired");

        if self.sound_effects {
            self.play_cue(completion.cue());
        }

        if self.desktop_notifications {
            if let Err(e) = self.notifier.notify(completion.title(), completion.message()) {
                tracing::warn!("Notification failed: {e}");
            }
        }
    }

    /// Play a sound cue regardless of the sound effects setting.
    pub fn play_cue(&mut self, cue: SoundCue) {
        let url = match cue {
            SoundCue::Bell => &self.bell_url,
            SoundCue::Chime => &self.chime_url,
        };

        if let Err(e) = self.player.play_clip(url) {
            tracing::warn!(?cue, "Audio play failed: {e}");
        }
    }

    /// Start the background music stream. Returns false if playback failed.
    pub fn start_music(&mut self, volume: f64) -> bool {
        match self.player.start_stream(&self.music_url, volume) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Music play failed: {e}");
                false
            }
        }
    }

    /// Stop the background music stream.
    pub fn stop_music(&mut self) {
        self.player.stop_stream();
    }

    /// Forward a volume change to the background music stream.
    pub fn set_music_volume(&mut self, volume: f64) {
        if let Err(e) = self.player.set_volume(volume) {
            tracing::warn!(volume, "Volume change failed: {e}");
        }
    }
}
