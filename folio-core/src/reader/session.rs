//! The read-eval loop as an explicit state machine

use super::View;
use std::io::{self, BufRead, Write};

/// Separator printed above and below the body
const RULE: &str = "----------------------------------------";

/// ANSI sequence clearing the terminal and homing the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// States of a reading session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The current unit needs to be drawn
    Displaying,
    /// Waiting for the next command line
    AwaitingCommand,
    /// The reader quit or input ended
    Exiting,
}

/// A single reader command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Search,
    Quit,
    /// Anything unrecognised; redisplays without moving
    Other(String),
}

impl Command {
    /// Parse one line of input (case-insensitive, exact match)
    pub fn parse(line: &str) -> Self {
        let cmd = line.trim_end_matches(['\r', '\n']).to_lowercase();
        match cmd.as_str() {
            "n" => Command::Next,
            "p" => Command::Prev,
            "s" => Command::Search,
            "q" => Command::Quit,
            _ => Command::Other(cmd),
        }
    }
}

/// Source of command lines
pub trait InputSource {
    /// Next line without its terminator, or `None` once input is exhausted
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead + ?Sized> InputSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Draw the full screen for a view
fn render_screen(out: &mut dyn Write, view: &dyn View) -> io::Result<()> {
    write!(out, "{}", CLEAR_SCREEN)?;
    writeln!(
        out,
        "📖 {} — {} {}/{}",
        view.title(),
        view.unit_label(),
        view.position() + 1,
        view.total()
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", view.body())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", view.hint())
}

/// Drives a [`View`] from an input source until the reader quits
pub struct Session<'a, V: View> {
    view: V,
    input: &'a mut dyn InputSource,
    out: &'a mut dyn Write,
    state: SessionState,
}

impl<'a, V: View> Session<'a, V> {
    pub fn new(view: V, input: &'a mut dyn InputSource, out: &'a mut dyn Write) -> Self {
        Self {
            view,
            input,
            out,
            state: SessionState::Displaying,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Perform one state transition and return the new state
    pub fn step(&mut self) -> io::Result<SessionState> {
        self.state = match self.state {
            SessionState::Displaying => {
                render_screen(&mut *self.out, &self.view)?;
                SessionState::AwaitingCommand
            }
            SessionState::AwaitingCommand => {
                write!(self.out, ">> ")?;
                self.out.flush()?;
                match self.input.next_line()? {
                    Some(line) => self.apply(Command::parse(&line))?,
                    None => SessionState::Exiting,
                }
            }
            SessionState::Exiting => SessionState::Exiting,
        };
        Ok(self.state)
    }

    /// Run until the reader quits and return the position to bookmark
    pub fn run(mut self) -> io::Result<u64> {
        while self.step()? != SessionState::Exiting {}
        let bookmark = self.view.bookmark();
        tracing::debug!("Session for {} ended at {}", self.view.title(), bookmark);
        Ok(bookmark)
    }

    fn apply(&mut self, command: Command) -> io::Result<SessionState> {
        match command {
            Command::Next => {
                self.view.next();
            }
            Command::Prev => {
                self.view.prev();
            }
            Command::Search if self.view.supports_search() => self.search()?,
            Command::Quit => return Ok(SessionState::Exiting),
            Command::Search | Command::Other(_) => {}
        }
        Ok(SessionState::Displaying)
    }

    fn search(&mut self) -> io::Result<()> {
        write!(self.out, "Search: ")?;
        self.out.flush()?;

        // Input closed mid-search: nothing to look for.
        let Some(keyword) = self.input.next_line()? else {
            return Ok(());
        };

        let matches = self.view.search(&keyword);
        writeln!(self.out, "Found {} matches", matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::TextView;
    use crate::types::TextDocument;
    use std::io::Cursor;

    fn numbered(count: usize) -> TextDocument {
        let text: String = (0..count).map(|i| format!("line {}\n", i)).collect();
        TextDocument::from_text("numbers.txt", &text)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("n"), Command::Next);
        assert_eq!(Command::parse("N\n"), Command::Next);
        assert_eq!(Command::parse("p\r\n"), Command::Prev);
        assert_eq!(Command::parse("s"), Command::Search);
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("next"), Command::Other("next".to_string()));
        assert_eq!(Command::parse(""), Command::Other(String::new()));
    }

    #[test]
    fn test_input_source_strips_terminators() {
        let mut input = Cursor::new("n\r\nq\n");
        assert_eq!(input.next_line().unwrap().as_deref(), Some("n"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("q"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_state_transitions() {
        let mut input = Cursor::new("x\nq\n");
        let mut out = Vec::new();
        let mut session = Session::new(TextView::new(numbered(10), 0, 25), &mut input, &mut out);

        assert_eq!(session.state(), SessionState::Displaying);
        assert_eq!(session.step().unwrap(), SessionState::AwaitingCommand);
        assert_eq!(session.step().unwrap(), SessionState::Displaying);
        assert_eq!(session.step().unwrap(), SessionState::AwaitingCommand);
        assert_eq!(session.step().unwrap(), SessionState::Exiting);
        assert_eq!(session.step().unwrap(), SessionState::Exiting);
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut input = Cursor::new("n\n");
        let mut out = Vec::new();
        let session = Session::new(TextView::new(numbered(60), 0, 25), &mut input, &mut out);

        assert_eq!(session.run().unwrap(), 25);
    }

    #[test]
    fn test_screen_layout() {
        let mut input = Cursor::new("q\n");
        let mut out = Vec::new();
        Session::new(TextView::new(numbered(3), 0, 25), &mut input, &mut out)
            .run()
            .unwrap();

        let screen = String::from_utf8(out).unwrap();
        let expected = format!(
            "{}📖 numbers.txt — Page 1/1\n{}\nline 0\nline 1\nline 2\n\n{}\n[n]ext  [p]rev  [s]earch  [q]uit\n>> ",
            CLEAR_SCREEN, RULE, RULE
        );
        assert_eq!(screen, expected);
    }

    #[test]
    fn test_search_reports_matches() {
        let mut input = Cursor::new("s\nLINE 42\nq\n");
        let mut out = Vec::new();
        Session::new(TextView::new(numbered(60), 0, 25), &mut input, &mut out)
            .run()
            .unwrap();

        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("Search: Found 1 matches"));
        assert!(screen.contains("Page 2/3"));
    }
}
