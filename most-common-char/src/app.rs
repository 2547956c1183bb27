use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use most_common_char_lib::{most_common_byte, most_common_char, CountError};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter a string: ";

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {} = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    answer(&mut stdin.lock(), &mut stdout.lock())
}

/// Prompts on `output`, reads one line from `input` and writes the result.
fn answer(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush().context("Failed to flush prompt to stdout")?;

    let line = read_line(input)?;
    // Valid UTF-8 is counted as text so a rejection names the whole character.
    let result = match std::str::from_utf8(&line) {
        Ok(text) => most_common_char(text)?,
        Err(_) => most_common_byte(&line)?,
    };

    writeln!(output, "{result}")?;
    output.flush()?;
    Ok(())
}

/// Reads one line as raw bytes, without its trailing `\n`.
///
/// A `\r` before the `\n` is part of the line and gets counted.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Vec<u8>> {
    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .context("Failed to read from stdin")?;

    if read == 0 {
        return Err(CountError::NoInput.into());
    }

    if line.last() == Some(&b'\n') {
        line.pop();
    }
    log::debug!("Read {} bytes from stdin", line.len());
    Ok(line)
}
