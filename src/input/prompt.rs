use std::io::{self, BufRead, Write};

use crate::game::Difficulty;

/// Ask the player for a difficulty on a line-oriented terminal.
///
/// Runs before raw mode is enabled. Invalid answers are reported and the
/// question is asked again; end of input falls back to the default preset.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Difficulty> {
    writeln!(output, "Select difficulty:")?;
    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        writeln!(
            output,
            "  {}) {:<6} ({} ms per tick{})",
            index + 1,
            difficulty.label(),
            difficulty.tick_delay_ms(),
            if difficulty.accelerates() { ", speeds up" } else { "" }
        )?;
    }

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(Difficulty::default());
        }

        if line.trim().is_empty() {
            return Ok(Difficulty::default());
        }

        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
