//! Line-oriented input.

use std::fmt;
use std::io::{self, BufRead, Write};

use dialoguer::theme::Theme;
use dialoguer::Input;

use crate::game::GameMode;

use super::ConsoleError;

/// Mode selection prompt.
pub const MODE_PROMPT: &str = "Choose game mode (1: best-of-3, 2: sum of cards): ";

/// Source of user input lines.
pub trait Prompt {
    /// Show `message` and read one line.
    ///
    /// `Ok(None)` means the user cancelled (closed input or interrupted).
    fn read_line(&mut self, message: &str) -> Result<Option<String>, ConsoleError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_line(&mut self, message: &str) -> Result<Option<String>, ConsoleError> {
        (**self).read_line(message)
    }
}

/// Theme that prints prompt messages exactly as given.
///
/// No `": "` suffix is added, unlike dialoguer's default theme.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        match default {
            Some(default) => write!(f, "{prompt}[{default}] "),
            None => write!(f, "{prompt}"),
        }
    }
}

/// Interactive prompt on the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, message: &str) -> Result<Option<String>, ConsoleError> {
        let answer = Input::<String>::with_theme(&PlainTheme)
            .with_prompt(message)
            .allow_empty(true)
            .report(false)
            .interact_text();

        terminal_answer(answer)
    }
}

/// EOF and Ctrl-C on the terminal count as cancelling.
fn terminal_answer(
    answer: Result<String, dialoguer::Error>,
) -> Result<Option<String>, ConsoleError> {
    match answer {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(err))
            if matches!(
                err.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
            ) =>
        {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Prompt over plain buffered lines, for piped input.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Read from `input`, writing prompt messages to `echo`.
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }

    /// Recover the writer, e.g. to inspect prompts in tests.
    pub fn into_echo(self) -> W {
        self.echo
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_line(&mut self, message: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.echo, "{message}")?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Ask for a game mode until the answer is 1 or 2.
///
/// Returns `Ok(None)` if the user cancelled instead of choosing.
pub fn choose_mode<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
) -> Result<Option<GameMode>, ConsoleError> {
    loop {
        let Some(line) = prompt.read_line(MODE_PROMPT)? else {
            writeln!(out, "Input cancelled. Exiting game.")?;
            return Ok(None);
        };

        match line.parse::<GameMode>() {
            Ok(mode) => return Ok(Some(mode)),
            Err(err) => {
                log::debug!("{err}");
                writeln!(out, "Invalid choice. Enter 1 or 2.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> LinePrompt<&[u8], Vec<u8>> {
        LinePrompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_line_prompt_reads_and_echoes() {
        let mut prompt = lines("hello\r\nworld\n");
        assert_eq!(prompt.read_line("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(prompt.read_line("> ").unwrap(), Some("world".to_string()));
        assert_eq!(prompt.read_line("> ").unwrap(), None);
        assert_eq!(prompt.into_echo(), b"> > > ".to_vec());
    }

    fn rendered(message: &str) -> String {
        let mut text = String::new();
        PlainTheme
            .format_input_prompt(&mut text, message, None)
            .unwrap();
        text
    }

    #[test]
    fn test_terminal_prompts_render_verbatim() {
        assert_eq!(
            rendered(MODE_PROMPT),
            "Choose game mode (1: best-of-3, 2: sum of cards): "
        );
        assert_eq!(
            rendered(crate::console::DRAW_PROMPT),
            "Press ENTER to draw cards."
        );
        assert!(!rendered(MODE_PROMPT).contains("::"));
    }

    #[test]
    fn test_terminal_cancel_maps_to_none() {
        for kind in [io::ErrorKind::Interrupted, io::ErrorKind::UnexpectedEof] {
            let answer = Err(dialoguer::Error::IO(io::Error::from(kind)));
            assert_eq!(terminal_answer(answer).unwrap(), None);
        }

        let answer = Ok("2".to_string());
        assert_eq!(terminal_answer(answer).unwrap(), Some("2".to_string()));

        let answer = Err(dialoguer::Error::IO(io::Error::from(
            io::ErrorKind::PermissionDenied,
        )));
        assert!(matches!(
            terminal_answer(answer),
            Err(ConsoleError::Prompt(_))
        ));
    }

    #[test]
    fn test_choose_mode_retries() {
        let mut prompt = lines("3\nabc\n 2 \n");
        let mut out = Vec::new();

        let mode = choose_mode(&mut prompt, &mut out).unwrap();

        assert_eq!(mode, Some(GameMode::SumOfCardsRounds));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid choice. Enter 1 or 2.").count(), 2);
    }

    #[test]
    fn test_choose_mode_cancelled() {
        let mut prompt = lines("9\n");
        let mut out = Vec::new();

        let mode = choose_mode(&mut prompt, &mut out).unwrap();

        assert_eq!(mode, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Input cancelled. Exiting game.\n"));
    }
}
