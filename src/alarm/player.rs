use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use crate::config::AlarmConfig;

/// Something that can play the azan from the start and stop it again.
pub trait Player {
    /// Start playback from the beginning.
    fn play(&mut self) -> Result<()>;
    /// Stop playback. Calling this while nothing plays is a no-op.
    fn stop(&mut self);
    fn is_playing(&mut self) -> bool;
}

/// Plays the sound file through an external audio player process. Each
/// `play` spawns a fresh process, so playback always starts at zero.
pub struct ProcessPlayer {
    program: String,
    args: Vec<String>,
    sound_file: PathBuf,
    child: Option<Child>,
}

impl ProcessPlayer {
    pub fn new(config: &AlarmConfig, sound_file: PathBuf) -> Self {
        Self {
            program: config.player.clone(),
            args: config.player_args.clone(),
            sound_file,
            child: None,
        }
    }
}

impl Player for ProcessPlayer {
    fn play(&mut self) -> Result<()> {
        self.stop();
        if !self.sound_file.exists() {
            bail!("Alarm sound {:?} does not exist", self.sound_file);
        }
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.sound_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Starting audio player '{}'", self.program))?;
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn is_playing(&mut self) -> bool {
        match self.child.as_mut().map(|c| c.try_wait()) {
            Some(Ok(None)) => true,
            Some(_) => {
                self.child = None;
                false
            }
            None => false,
        }
    }
}

impl Drop for ProcessPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub use testing::RecordingPlayer;
