//! Renders a slow sweep of the whole Wave Form range to a WAV file.
//!
//! Usage: `cargo run --example render_sweep --features wav-export [path] [seconds]`

use morphwave::{
    LinearSmoother, MorphingOscillator, OUTPUT_LEVEL, WAVE_FORM, decibels_to_gain, render_to_wav,
};

const SAMPLE_RATE: u32 = 48000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "morph_sweep.wav".to_string());
    let seconds: f64 = match args.next() {
        Some(s) => s.parse()?,
        None => 8.0,
    };

    // Position ramps from the bottom to the top of the control range over the whole render
    let ramp_samples = (seconds * f64::from(SAMPLE_RATE)).round() as u32;
    let mut sweep = LinearSmoother::new(WAVE_FORM.range.min(), ramp_samples);
    sweep.set_target(WAVE_FORM.range.max());

    let level = decibels_to_gain(OUTPUT_LEVEL.range.snap(-6.0));
    let mut osc = MorphingOscillator::<SAMPLE_RATE>::new(110.0, sweep).with_amplitude(level);

    let written = render_to_wav::<SAMPLE_RATE, _, _>(&mut osc, seconds, &path)?;
    println!("wrote {} samples to {}", written, path);
    Ok(())
}
