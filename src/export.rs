//! Offline rendering to memory or to a WAV file.

use std::path::Path;

use tracing::info;

use crate::{AudioSignal, ExportError, Signal};

/// Pulls `count` samples from `signal` into a new buffer.
pub fn render_samples<S: Signal>(signal: &mut S, count: usize) -> Vec<f64> {
    let mut buffer = vec![0.0; count];
    signal.process(&mut buffer);
    buffer
}

/// Renders `seconds` of `signal` to a mono 32-bit float WAV file.
///
/// The sample rate of the file is the signal's own. Samples are written
/// unclamped. Returns the number of samples written.
///
/// # Errors
///
/// `ExportError::EmptyRender` if `seconds` rounds to zero samples (or is
/// negative or not finite), `ExportError::Wav` if the file cannot be
/// created or written.
///
/// # Examples
///
/// ```no_run
/// use morphwave::{MorphingOscillator, render_to_wav};
///
/// let mut osc = MorphingOscillator::<44100>::new(110.0, 0.9);
/// let written = render_to_wav::<44100, _, _>(&mut osc, 2.0, "morph.wav")?;
/// assert_eq!(written, 88200);
/// # Ok::<(), morphwave::ExportError>(())
/// ```
pub fn render_to_wav<const SAMPLE_RATE: u32, S, P>(
    signal: &mut S,
    seconds: f64,
    path: P,
) -> Result<usize, ExportError>
where
    S: AudioSignal<SAMPLE_RATE>,
    P: AsRef<Path>,
{
    let count = sample_count(seconds, SAMPLE_RATE);
    if count == 0 {
        return Err(ExportError::EmptyRender);
    }

    let path = path.as_ref();
    info!(path = %path.display(), samples = count, sample_rate = SAMPLE_RATE, "rendering WAV");

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;

    let mut block = [0.0; 1024];
    let mut left = count;
    while left > 0 {
        let len = left.min(block.len());
        signal.process(&mut block[..len]);
        for &sample in &block[..len] {
            writer.write_sample(sample as f32)?;
        }
        left -= len;
    }
    writer.finalize()?;

    info!(path = %path.display(), "finished WAV render");
    Ok(count)
}

fn sample_count(seconds: f64, sample_rate: u32) -> usize {
    let samples = (seconds * f64::from(sample_rate)).round();
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}
