//! Procedural sound effects
//!
//! The simulation only emits [`Sound`] events; an [`AudioSink`] decides how
//! (and whether) to play them.

use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Ball bounced off a wall or a paddle
    Hit,
    /// A point was scored
    Score,
}

impl Sound {
    pub fn frequency(self) -> f32 {
        match self {
            Sound::Hit => 440.0,
            Sound::Score => 880.0,
        }
    }

    /// Length in seconds
    pub fn duration(self) -> f32 {
        match self {
            Sound::Hit => 0.05,
            Sound::Score => 0.2,
        }
    }

    /// Mono PCM samples in [-1, 1].
    ///
    /// Hit is a flat half-volume blip, Score fades linearly to silence.
    pub fn samples(self, sample_rate: f32) -> Vec<f32> {
        let num_samples = (sample_rate * self.duration()) as usize;
        let period = sample_rate / self.frequency();

        (0..num_samples)
            .map(|i| {
                let wave = (i as f32 / period * TAU).sin();
                let envelope = match self {
                    Sound::Hit => 0.5,
                    Sound::Score => 1.0 - i as f32 / num_samples as f32,
                };
                wave * envelope
            })
            .collect()
    }
}

/// Fire-and-forget audio output. Implementations must swallow their own
/// failures (e.g. a buffer that is not ready yet).
pub trait AudioSink {
    fn play(&mut self, sound: Sound);

    fn play_hit(&mut self) {
        self.play(Sound::Hit);
    }

    fn play_score(&mut self) {
        self.play(Sound::Score);
    }
}

/// Discards every sound
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _sound: Sound) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_length_and_amplitude() {
        let samples = Sound::Hit.samples(44_100.0);
        assert_eq!(samples.len(), 2205);
        let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak <= 0.5 + 1e-6);
        assert!(peak > 0.45, "A 440 Hz sine should reach near its amplitude");
    }

    #[test]
    fn test_score_fades_out() {
        let samples = Sound::Score.samples(48_000.0);
        assert_eq!(samples.len(), 9600);
        assert_eq!(samples[0], 0.0);

        let head = samples[..480].iter().fold(0.0f32, |m, s| m.max(s.abs()));
        let tail = samples[9120..].iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(tail < head, "Score sound should decay");
        assert!(tail < 0.06);
    }

    #[test]
    fn test_audio_sink_helpers() {
        #[derive(Default)]
        struct Recorder(Vec<Sound>);
        impl AudioSink for Recorder {
            fn play(&mut self, sound: Sound) {
                self.0.push(sound);
            }
        }

        let mut sink = Recorder::default();
        sink.play_hit();
        sink.play_score();
        assert_eq!(sink.0, vec![Sound::Hit, Sound::Score]);
    }
}
