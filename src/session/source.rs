use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking supplier of input lines.
///
/// The session only ever asks for the next line, so a live terminal, a
/// script file and an in-memory list of lines are interchangeable.
pub trait LineSource {
    /// Returns the next line without its trailing newline, or `None` once the
    /// input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Reads lines from the process's standard input.
pub type StdinSource = ReaderSource<io::StdinLock<'static>>;

impl StdinSource {
    pub fn stdin() -> Self {
        ReaderSource::new(io::stdin().lock())
    }
}

/// A fixed list of lines, handed out in order. Used to replay a session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
