use std::{
    path::PathBuf,
    process::{
        Command,
        Stdio,
    },
    thread,
};

/// Sound effects the app can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Played once when a swipe commits to a dismiss.
    Rise,
}

impl Sound {
    pub fn file_name(&self) -> &'static str {
        match self {
            Sound::Rise => "sound-rise.mp3",
        }
    }

    pub fn asset_path(&self) -> PathBuf {
        PathBuf::from("assets").join("sounds").join(self.file_name())
    }
}

/// Fire-and-forget bridge to an external audio player. Playback runs on a
/// detached thread and every failure is swallowed after a log line; nothing
/// here ever reaches the deck or gesture state.
pub struct SoundPlayer {
    enabled: bool,
}

impl SoundPlayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn play(&self, sound: Sound) {
        if !self.enabled {
            return;
        }

        let path = sound.asset_path();
        thread::spawn(move || {
            if !path.exists() {
                eprintln!("[Player] Missing sound asset: {}", path.display());
                return;
            }

            for (program, args) in Self::backends() {
                let mut command = Command::new(program);
                command.args(args).arg(&path).stdout(Stdio::null()).stderr(Stdio::null());

                match command.status() {
                    Ok(status) if status.success() => return,
                    Ok(_) => continue,
                    Err(_) => continue, // player not installed, try the next one
                }
            }

            eprintln!("[Player] No audio player could play {}", path.display());
        });
    }

    /// Candidate command-line players, tried in order.
    #[cfg(target_os = "macos")]
    fn backends() -> &'static [(&'static str, &'static [&'static str])] {
        &[("afplay", &[])]
    }

    #[cfg(target_os = "linux")]
    fn backends() -> &'static [(&'static str, &'static [&'static str])] {
        &[
            ("mpv", &["--no-video", "--really-quiet"]),
            ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
            ("paplay", &[]),
        ]
    }

    #[cfg(target_os = "windows")]
    fn backends() -> &'static [(&'static str, &'static [&'static str])] {
        &[
            ("mpv", &["--no-video", "--really-quiet"]),
            ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    fn backends() -> &'static [(&'static str, &'static [&'static str])] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rise_maps_to_its_asset() {
        assert_eq!(Sound::Rise.file_name(), "sound-rise.mp3");
        assert!(Sound::Rise.asset_path().ends_with("sounds/sound-rise.mp3"));
    }

    #[test]
    fn player_toggles() {
        let mut player = SoundPlayer::new(true);
        assert!(player.is_enabled());

        player.set_enabled(false);
        assert!(!player.is_enabled());

        // Disabled playback is a no-op, never an error.
        player.play(Sound::Rise);
    }
}
