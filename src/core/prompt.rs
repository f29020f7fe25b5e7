//! Single question prompts
//!
//! On a terminal the question is rendered with `dialoguer`. Otherwise one
//! line is read from stdin so the command also works in pipes.

use crate::error::{CliError, Result};
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, instrument};

/// Ask one question and wait for the answer
#[instrument]
pub fn ask(question: &str) -> Result<String> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        debug!("Prompting on terminal");
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CliError::prompt_with_source("Terminal prompt failed", e))
    } else {
        debug!("Stdin is not a terminal, reading a plain line");
        let stdin = io::stdin();
        let stdout = io::stdout();
        ask_from(&mut stdin.lock(), &mut stdout.lock(), question)
    }
}

/// Write the question to `output` and read one line of answer from `input`
pub fn ask_from<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    writeln!(output, "{question}")
        .and_then(|()| output.flush())
        .map_err(|e| CliError::prompt_with_source("Unable to write prompt", e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| CliError::prompt_with_source("Unable to read answer", e))?;
    if read == 0 {
        return Err(CliError::prompt("No answer received before end of input"));
    }

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}
