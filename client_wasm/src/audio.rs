//! Web Audio playback of the synthesised effects

use game_core::{AudioSink, Sound};
use web_sys::{AudioBuffer, AudioContext};

pub struct WebAudio {
    context: Option<AudioContext>,
    hit: Option<AudioBuffer>,
    score: Option<AudioBuffer>,
}

impl WebAudio {
    /// Render both effects up front. Without Web Audio every play is a no-op.
    pub fn new() -> Self {
        let context = match AudioContext::new() {
            Ok(context) => context,
            Err(err) => {
                log::warn!("Audio disabled: {:?}", err);
                return Self {
                    context: None,
                    hit: None,
                    score: None,
                };
            }
        };

        let hit = render(&context, Sound::Hit);
        let score = render(&context, Sound::Score);
        Self {
            context: Some(context),
            hit,
            score,
        }
    }

    /// Browsers keep a context suspended until a user gesture
    pub fn resume(&self) {
        if let Some(context) = &self.context {
            let _ = context.resume();
        }
    }

    fn buffer(&self, sound: Sound) -> Option<&AudioBuffer> {
        match sound {
            Sound::Hit => self.hit.as_ref(),
            Sound::Score => self.score.as_ref(),
        }
    }
}

fn render(context: &AudioContext, sound: Sound) -> Option<AudioBuffer> {
    let sample_rate = context.sample_rate();
    let mut samples = sound.samples(sample_rate);
    let buffer = context
        .create_buffer(1, samples.len() as u32, sample_rate)
        .ok()?;
    buffer.copy_to_channel(&mut samples, 0).ok()?;
    Some(buffer)
}

impl AudioSink for WebAudio {
    fn play(&mut self, sound: Sound) {
        let (Some(context), Some(buffer)) = (&self.context, self.buffer(sound)) else {
            return;
        };
        let Ok(source) = context.create_buffer_source() else {
            return;
        };
        source.set_buffer(Some(buffer));
        if source
            .connect_with_audio_node(&context.destination())
            .is_err()
        {
            return;
        }
        let _ = source.start();
    }
}
