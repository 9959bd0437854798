//! The catch cue, fired on every scoring collision.
//!
//! Playback is fire-and-forget: a cue that cannot be played is logged and dropped.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct SoundError(pub String);

impl Display for SoundError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SoundError {}

pub trait SoundCue {
    fn play_catch(&mut self);
}

/// Silent cue for builds without the `audio` feature; counts what would have been played.
#[derive(Debug, Default)]
pub struct LogCue {
    pub played: u64,
}

impl SoundCue for LogCue {
    fn play_catch(&mut self) {
        self.played += 1;
        log::debug!("catch #{}", self.played);
    }
}

#[cfg(feature = "audio")]
pub use rodio_cue::RodioCue;

#[cfg(feature = "audio")]
mod rodio_cue {
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::{SoundCue, SoundError};

    pub struct RodioCue {
        /// must outlive every sink
        _output_stream: OutputStream,
        stream_handle: OutputStreamHandle,
        catch: Arc<[u8]>,
    }

    impl RodioCue {
        pub fn open(catch_sound: &Path) -> Result<Self, SoundError> {
            let (output_stream, stream_handle) = OutputStream::try_default()
                .map_err(|e| SoundError(format!("no audio output: {e}")))?;
            let bytes = std::fs::read(catch_sound)
                .map_err(|e| SoundError(format!("cannot read {}: {e}", catch_sound.display())))?;
            // a file that does not decode is a startup error
            Decoder::new(Cursor::new(bytes.clone()))
                .map_err(|e| SoundError(format!("cannot decode {}: {e}", catch_sound.display())))?;
            Ok(Self {
                _output_stream: output_stream,
                stream_handle,
                catch: Arc::from(bytes),
            })
        }

        fn try_play(&self) -> Result<(), SoundError> {
            let sink = Sink::try_new(&self.stream_handle)
                .map_err(|e| SoundError(format!("failed to create sink: {e}")))?;
            let source = Decoder::new(Cursor::new(Arc::clone(&self.catch)))
                .map_err(|e| SoundError(format!("failed to decode audio: {e}")))?;
            sink.append(source);
            sink.detach();
            Ok(())
        }
    }

    impl SoundCue for RodioCue {
        fn play_catch(&mut self) {
            if let Err(e) = self.try_play() {
                log::warn!("catch sound dropped: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_cue_counts() {
        let mut cue = LogCue::default();
        cue.play_catch();
        cue.play_catch();
        assert_eq!(cue.played, 2);
    }
}
