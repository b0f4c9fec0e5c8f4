use crate::error::ShiftError;
use crate::offset::Offset;
use crate::parser;

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

/// Per-line classifier states. `Counter` expects a cue index, `TimeRange`
/// the timestamp pair, `Subtitle` the text lines up to the blank separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Counter,
    TimeRange,
    Subtitle,
}

pub struct Engine {
    offset: Offset,
}

impl Engine {
    pub fn new(offset: Offset) -> Self {
        Engine { offset }
    }

    /// Stream the input file to the output path, shifting every time-range
    /// line. With no output path every line is still parsed and validated,
    /// but nothing is written.
    pub fn transform_file(&self, input: &Path, output: Option<&Path>) -> Result<(), ShiftError> {
        let reader = BufReader::new(File::open(input)?);
        match output {
            Some(path) => self.transform(reader, BufWriter::new(File::create(path)?)),
            None => self.transform(reader, io::sink()),
        }
    }

    /// Walk the lines to exhaustion, writing each one `\n`-terminated. The
    /// first parse or I/O failure aborts the walk; lines already written
    /// stay in the output.
    pub fn transform<R, W>(&self, reader: R, mut writer: W) -> Result<(), ShiftError>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = State::Counter;
        for (index, line) in reader.lines().enumerate() {
            let mut line = line?;
            if index == 0 {
                if let Some(stripped) = line.strip_prefix('\u{FEFF}') {
                    line = stripped.to_string();
                }
            }

            let (next, output) = self.step(state, &line)?;
            writeln!(writer, "{}", output)?;
            state = next;
        }
        writer.flush()?;
        Ok(())
    }

    fn step<'a>(&self, state: State, line: &'a str) -> Result<(State, Cow<'a, str>), ShiftError> {
        match state {
            State::Counter => {
                debug!("state={:?} value={}", state, line);
                Ok((State::TimeRange, Cow::Borrowed(line)))
            }
            State::TimeRange => {
                let shifted = parser::parse_time_range(line)?.shifted(self.offset);
                debug!("state={:?} old={} new={}", state, line, shifted);
                Ok((State::Subtitle, Cow::Owned(shifted.to_string())))
            }
            State::Subtitle => {
                debug!("state={:?} value={}", state, line);
                let next = if line.is_empty() {
                    State::Counter
                } else {
                    State::Subtitle
                };
                Ok((next, Cow::Borrowed(line)))
            }
        }
    }
}
