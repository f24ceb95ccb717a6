//! Shared audio and terminal plumbing for the demos.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use std::panic;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Audio state the output stream pulls samples from.
pub trait DemoAudioState: Send + 'static {
    /// Called once with the device sample rate, before the stream starts.
    fn prepare(&mut self, sample_rate: f64);

    fn next_sample(&mut self) -> f64;
}

/// What the key handler wants the event loop to do next.
pub enum KeyAction {
    Continue,
    Exit,
}

/// Installs a stderr `tracing` subscriber at INFO level.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

/// Runs an interactive demo: opens the default output device, switches the
/// terminal to raw mode and feeds key events to `key_handler` until it
/// returns `KeyAction::Exit`.
pub fn run_interactive<S, F, K>(mut state: S, draw: F, key_handler: K) -> Result<()>
where
    S: DemoAudioState,
    F: Fn(&Arc<Mutex<S>>) -> Result<()>,
    K: Fn(&Arc<Mutex<S>>, &KeyEvent) -> Result<KeyAction>,
{
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    state.prepare(f64::from(config.sample_rate().0));
    tracing::info!(
        device = %device.name().unwrap_or_default(),
        sample_rate = config.sample_rate().0,
        "opening output stream"
    );
    let state = Arc::new(Mutex::new(state));

    let _stream = match config.sample_format() {
        SampleFormat::F32 => create_stream::<f32, S>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => create_stream::<i16, S>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => create_stream::<u16, S>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    // Restore the terminal if anything panics
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    draw(&state)?;

    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
        {
            match key_handler(&state, &key_event)? {
                KeyAction::Continue => draw(&state)?,
                KeyAction::Exit => break,
            }
        }
    }

    cleanup_terminal();
    Ok(())
}

fn create_stream<T, S>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<S>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
    S: DemoAudioState,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut state = match state.lock() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(state.next_sample());
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| tracing::error!(%err, "audio stream error"),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Q and Esc quit.
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
