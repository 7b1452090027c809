//! Looping background music that follows the pause toggle.

use anyhow::Context;
use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundHandle},
    tween::Tween,
};
use std::path::Path;

/// Whether the music should switch state, given what it is doing now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pause,
    Resume,
    Stay,
}

/// Pause/resume edge for a new pause flag.
#[inline]
pub fn transition(currently_paused: bool, want_paused: bool) -> Transition {
    match (currently_paused, want_paused) {
        (false, true) => Transition::Pause,
        (true, false) => Transition::Resume,
        _ => Transition::Stay,
    }
}

/// Background track. Fields drop in declaration order: the sound handle
/// before the manager that owns the audio device.
pub struct Music {
    handle: StaticSoundHandle,
    _manager: AudioManager<DefaultBackend>,
    paused: bool,
}

impl Music {
    /// Open the audio device and start `path` looping from the beginning.
    pub fn play_looped(path: &Path) -> anyhow::Result<Self> {
        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .context("Error setting up audio manager")?;

        let data = StaticSoundData::from_file(path)
            .with_context(|| format!("Loading music {}", path.display()))?
            .loop_region(..);

        let handle = manager
            .play(data)
            .map_err(|err| anyhow::anyhow!("Error playing music {}: {err:?}", path.display()))?;
        log::info!("Playing music {}", path.display());

        Ok(Music {
            handle,
            _manager: manager,
            paused: false,
        })
    }

    /// Pause or resume to match `paused`. Only acts on a change.
    pub fn sync_paused(&mut self, paused: bool) {
        match transition(self.paused, paused) {
            Transition::Pause => {
                self.handle.pause(Tween::default());
                log::debug!("Music paused");
            }
            Transition::Resume => {
                self.handle.resume(Tween::default());
                log::debug!("Music resumed");
            }
            Transition::Stay => return,
        }
        self.paused = paused;
    }
}
