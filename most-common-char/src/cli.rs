//! Defines the command-line interface for the application.

use clap::Parser;

/// The program takes no options of its own: the text is read interactively.
#[derive(Parser, Debug)]
#[command(
    name = "most-common-char",
    version,
    about = "Report the most frequent character of a line of ASCII text.",
    long_about = "Prompts for one line on stdin and prints its most frequent character \
                  (case-insensitive, uppercased) and that character's count, as '<char>' <count>. \
                  Ties go to the character with the lowest ASCII code."
)]
pub struct Cli {}
