//! Media playback through an external player process.

use std::process::{Child, Command, Stdio};

use crate::config::AudioConfig;
use crate::error::StudyTimerError;
use crate::features::effects::MediaPlayer;

/// Plays audio by spawning a player executable such as `mpv`.
///
/// Clips are spawned and left to finish on their own; they are reaped on
/// later calls. The background stream is a long-lived child that is killed
/// on stop, on restart, and on drop.
#[derive(Debug)]
pub struct CommandPlayer {
    command: String,
    args: Vec<String>,
    volume_arg: String,
    clips: Vec<Child>,
    stream: Option<Stream>,
}

#[derive(Debug)]
struct Stream {
    child: Child,
    url: String,
}

impl CommandPlayer {
    /// Create a player for the given executable and base arguments.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>, volume_arg: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args,
            volume_arg: volume_arg.into(),
            clips: Vec::new(),
            stream: None,
        }
    }

    /// Create a player from audio settings.
    #[must_use]
    pub fn from_config(audio: &AudioConfig) -> Self {
        Self::new(
            audio.player_command.clone(),
            audio.player_args.clone(),
            audio.volume_arg.clone(),
        )
    }

    fn command_for(&self, url: &str, volume: Option<f64>) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        if let Some(volume) = volume {
            cmd.arg(volume_argument(&self.volume_arg, volume));
        }
        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    fn spawn(&self, url: &str, volume: Option<f64>) -> Result<Child, StudyTimerError> {
        self.command_for(url, volume).spawn().map_err(|e| {
            StudyTimerError::Playback(format!("could not start '{}': {e}", self.command))
        })
    }

    fn reap_clips(&mut self) {
        self.clips.retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl MediaPlayer for CommandPlayer {
    fn play_clip(&mut self, url: &str) -> Result<(), StudyTimerError> {
        self.reap_clips();
        let child = self.spawn(url, None)?;
        tracing::debug!(url, pid = child.id(), "playing clip");
        self.clips.push(child);
        Ok(())
    }

    fn start_stream(&mut self, url: &str, volume: f64) -> Result<(), StudyTimerError> {
        self.stop_stream();
        let child = self.spawn(url, Some(volume))?;
        tracing::debug!(url, volume, pid = child.id(), "music started");
        self.stream = Some(Stream {
            child,
            url: url.to_string(),
        });
        Ok(())
    }

    fn stop_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.child.kill() {
                tracing::debug!("music player already gone: {e}");
            }
            stream.child.wait().ok();
            tracing::debug!("music stopped");
        }
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), StudyTimerError> {
        // The external player has no control channel; restart at the new volume.
        let Some(url) = self.stream.as_ref().map(|s| s.url.clone()) else {
            return Ok(());
        };
        self.start_stream(&url, volume)
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.stop_stream();
    }
}

/// Player that does nothing. Used with `--quiet`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl MediaPlayer for SilentPlayer {
    fn play_clip(&mut self, _url: &str) -> Result<(), StudyTimerError> {
        Ok(())
    }

    fn start_stream(&mut self, _url: &str, _volume: f64) -> Result<(), StudyTimerError> {
        Ok(())
    }

    fn stop_stream(&mut self) {}

    fn set_volume(&mut self, _volume: f64) -> Result<(), StudyTimerError> {
        Ok(())
    }
}

/// Render the volume argument, mapping 0.0 - 1.0 to a 0 - 100 percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn volume_argument(template: &str, volume: f64) -> String {
    let percent = (volume.clamp(0.0, 1.0) * 100.0).round() as u32;
    template.replace("{percent}", &percent.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_argument() {
        assert_eq!(volume_argument("--volume={percent}", 0.3), "--volume=30");
        assert_eq!(volume_argument("-volume {percent}", 1.0), "-volume 100");
        assert_eq!(volume_argument("--volume={percent}", 2.0), "--volume=100");
    }

    #[test]
    fn test_command_line() {
        let player = CommandPlayer::new(
            "mpv",
            vec!["--no-video".to_string()],
            "--volume={percent}",
        );
        let cmd = player.command_for("https://example.com/a.mp3", Some(0.5));

        assert_eq!(cmd.get_program(), "mpv");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["--no-video", "--volume=50", "https://example.com/a.mp3"]);
    }

    #[test]
    fn test_missing_player_is_an_error() {
        let mut player = CommandPlayer::new("studytimer-no-such-player", Vec::new(), "");
        let err = player.play_clip("https://example.com/a.mp3").unwrap_err();
        assert!(matches!(err, StudyTimerError::Playback(_)));
        assert!(player.start_stream("https://example.com/s", 0.3).is_err());
        assert!(player.stream.is_none());
    }

    #[test]
    fn test_set_volume_without_stream_is_noop() {
        let mut player = CommandPlayer::new("studytimer-no-such-player", Vec::new(), "");
        assert!(player.set_volume(0.8).is_ok());
    }
}
