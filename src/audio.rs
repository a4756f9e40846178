//! Audio feedback hooks
//!
//! The simulation never plays sound itself. It signals jumps, scores and
//! game over through [`GameHooks`]; [`AudioManager`] maps those signals to
//! [`SoundEffect`]s on whatever [`AudioSink`] the host provides.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump / session start
    Flap,
    /// Obstacle passed
    Score,
    /// Fatal collision
    Die,
}

/// Collaborator notified by the frame driver
pub trait GameHooks {
    fn on_jump(&mut self);
    fn on_score(&mut self, score: u32);
    fn on_game_over(&mut self, score: u32, new_best: bool);
}

/// Anything that can play a sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that just logs what would play (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Set sound effects volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn play(&mut self, effect: SoundEffect) {
        let volume = self.master_volume * self.sfx_volume;
        if volume > 0.0 {
            self.sink.play(effect, volume);
        }
    }
}

impl<S: AudioSink> GameHooks for AudioManager<S> {
    fn on_jump(&mut self) {
        self.play(SoundEffect::Flap);
    }

    fn on_score(&mut self, _score: u32) {
        self.play(SoundEffect::Score);
    }

    fn on_game_over(&mut self, _score: u32, _new_best: bool) {
        self.play(SoundEffect::Die);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_hooks_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.on_jump();
        audio.on_score(1);
        audio.on_game_over(1, true);
        assert_eq!(
            audio.sink().0,
            vec![SoundEffect::Flap, SoundEffect::Score, SoundEffect::Die]
        );
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_sfx_volume(0.0);
        audio.on_jump();
        audio.on_game_over(3, false);
        assert!(audio.sink().0.is_empty());
    }
}
