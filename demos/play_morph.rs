//! Plays the morphing oscillator live.
//!
//! Left/Right move the Wave Form control, Up/Down change the Output Level,
//! keys 1-8 pick a note from an A minor scale, R resets the oscillator.

mod common;

use common::{DemoAudioState, KeyAction};
use crossterm::event::{KeyCode, KeyEventKind};
use morphwave::{
    Frequency, LinearSmoother, MorphCore, OUTPUT_LEVEL, Oscillator, Region, SplitPoints,
    WAVE_FORM, decibels_to_gain, hz,
};
use std::io::{Write, stdout};

const SCALE: [Frequency; 8] = [
    hz!("A2"),
    hz!("B2"),
    hz!("C3"),
    hz!("D3"),
    hz!("E3"),
    hz!("F3"),
    hz!("G3"),
    hz!("A3"),
];

struct MorphState {
    core: MorphCore,
    sample_rate: f64,
    frequency: Frequency,
    position: f64,
    level_db: f64,
    level: LinearSmoother,
}

impl MorphState {
    fn new() -> Self {
        let level_db = OUTPUT_LEVEL.range.default_value();
        Self {
            core: MorphCore::new(),
            sample_rate: 44100.0,
            frequency: SCALE[0],
            position: WAVE_FORM.range.default_value(),
            level_db,
            level: LinearSmoother::new(decibels_to_gain(level_db), 0),
        }
    }

    fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
        self.core
            .set_increment(frequency.phase_increment(self.sample_rate));
    }

    fn nudge_position(&mut self, steps: f64) {
        let range = WAVE_FORM.range;
        self.position = range.snap(self.position + steps * range.step());
    }

    fn nudge_level(&mut self, db: f64) {
        self.level_db = OUTPUT_LEVEL.range.snap(self.level_db + db);
        self.level.set_target(decibels_to_gain(self.level_db));
    }
}

impl DemoAudioState for MorphState {
    fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        // 50 ms level ramps
        self.level = LinearSmoother::with_ramp_time(self.level.current(), 0.05, sample_rate);
        self.set_frequency(self.frequency);
    }

    fn next_sample(&mut self) -> f64 {
        self.core.set_amplitude(self.level.next_value());
        self.core.next_sample(self.position)
    }
}

fn draw(state: &MorphState) -> anyhow::Result<()> {
    let region = match Region::of(state.position, &SplitPoints::default()) {
        Region::A => "rectifier",
        Region::B => "rectifier -> comparator",
        Region::C => "comparator",
    };

    let mut out = stdout();
    write!(out, "\x1b[2J\x1b[H")?;
    write!(out, "Morphing oscillator\r\n\r\n")?;
    write!(
        out,
        "  {:<12} {:.2} {}  ({})\r\n",
        WAVE_FORM.name, state.position, WAVE_FORM.label, region
    )?;
    write!(
        out,
        "  {:<12} {:+.1} {}\r\n",
        OUTPUT_LEVEL.name, state.level_db, OUTPUT_LEVEL.label
    )?;
    write!(out, "  {:<12} {:.2} Hz\r\n\r\n", "Pitch", state.frequency.as_f64())?;
    write!(
        out,
        "  Left/Right: wave form   Up/Down: level   1-8: note   R: reset   Q: quit\r\n"
    )?;
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    common::init_logging();

    common::run_interactive(
        MorphState::new(),
        |state| {
            let state = state.lock().map_err(|_| anyhow::anyhow!("audio state poisoned"))?;
            draw(&state)
        },
        |state, key| {
            if key.kind != KeyEventKind::Press {
                return Ok(KeyAction::Continue);
            }
            if common::is_quit_key(key.code) {
                return Ok(KeyAction::Exit);
            }

            let mut state = state.lock().map_err(|_| anyhow::anyhow!("audio state poisoned"))?;
            match key.code {
                KeyCode::Left => state.nudge_position(-1.0),
                KeyCode::Right => state.nudge_position(1.0),
                KeyCode::Up => state.nudge_level(1.0),
                KeyCode::Down => state.nudge_level(-1.0),
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    state.core.reset();
                    let gain = decibels_to_gain(state.level_db);
                    state.level.set_current_and_target(gain);
                }
                KeyCode::Char(c @ '1'..='8') => {
                    let index = c as usize - '1' as usize;
                    state.set_frequency(SCALE[index]);
                }
                _ => {}
            }
            Ok(KeyAction::Continue)
        },
    )
}
