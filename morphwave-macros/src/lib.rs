use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Resolves a note name to a `morphwave::Frequency` at compile time.
///
/// The note is turned into a MIDI number and then into Hz while the
/// crate is being compiled, so the expansion is a single
/// `Frequency::from_hz(<literal>)` call.
///
/// # Format
///
/// `<letter>[#|b][octave]`:
/// - `letter` is one of C, D, E, F, G, A, B (case-insensitive)
/// - a single `#` or `b` raises or lowers by a semitone
/// - `octave` is -1 to 9 and defaults to 4
///
/// The resulting note must be a MIDI note (C-1 to G9), so `Cb-1` and
/// anything above `G9` are rejected with a `compile_error!`.
///
/// # Examples
///
/// ```ignore
/// use morphwave::hz;
///
/// let a4 = hz!("A4"); // 440 Hz
/// let low = hz!("Eb2");
/// let middle_c = hz!("C");
/// ```
#[proc_macro]
pub fn hz(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let text = input.value();

    let expanded: TokenStream2 = match resolve(&text) {
        Ok(note) => {
            let frequency = midi_to_hz(note);
            quote! {
                ::morphwave::Frequency::from_hz(#frequency)
            }
        }
        Err(reason) => {
            let message = format!("cannot read '{}' as a note: {}", text, reason);
            quote! {
                compile_error!(#message)
            }
        }
    };

    expanded.into()
}

fn resolve(text: &str) -> Result<u8, String> {
    let (semitone, octave) = parse_note_name(text)?;
    note_number(semitone, octave)
}

/// Semitone offset of a natural note letter from C.
fn letter_offset(letter: char) -> Option<i16> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Splits a note name into (semitone relative to C of its octave, octave).
///
/// The semitone may be -1 (Cb) or 12 (B#); `note_number` carries that
/// into the neighbouring octave.
fn parse_note_name(text: &str) -> Result<(i16, i16), String> {
    let mut chars = text.chars();
    let letter = chars.next().ok_or_else(|| "empty string".to_string())?;
    let mut semitone =
        letter_offset(letter).ok_or_else(|| format!("'{}' is not a note letter", letter))?;

    let rest = chars.as_str();
    let rest = if let Some(stripped) = rest.strip_prefix('#') {
        semitone += 1;
        stripped
    } else if let Some(stripped) = rest.strip_prefix('b') {
        semitone -= 1;
        stripped
    } else {
        rest
    };

    if rest.is_empty() {
        return Ok((semitone, 4));
    }

    let octave = rest
        .parse::<i16>()
        .map_err(|_| format!("'{}' is not an octave number", rest))?;
    if !(-1..=9).contains(&octave) {
        return Err(format!("octave {} is outside -1..=9", octave));
    }

    Ok((semitone, octave))
}

fn note_number(semitone: i16, octave: i16) -> Result<u8, String> {
    let note = (octave + 1) * 12 + semitone;
    u8::try_from(note)
        .ok()
        .filter(|n| *n <= 127)
        .ok_or_else(|| format!("MIDI note {} is outside 0..=127", note))
}

fn midi_to_hz(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((f64::from(note) - 69.0) / 12.0)
}
