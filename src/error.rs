use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ShiftError {
    OffsetParse(String),
    InputMissing(PathBuf),
    TimeRange(String),
    Io(io::Error),
}

impl ShiftError {
    /// Process exit code for each failure class. Argument problems exit
    /// with 1, a missing input path with 2, anything that aborts the
    /// transform itself with 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShiftError::OffsetParse(_) => 1,
            ShiftError::InputMissing(_) => 2,
            ShiftError::TimeRange(_) => 3,
            ShiftError::Io(_) => 3,
        }
    }
}

impl Error for ShiftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShiftError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShiftError::OffsetParse(expr) => write!(
                fmt,
                "Unable to parse offset '{}'. Expected e.g. 1m, -2m, 20ss",
                expr
            ),
            ShiftError::InputMissing(path) => {
                write!(fmt, "Input path provided does not exist: {}", path.display())
            }
            ShiftError::TimeRange(line) => write!(fmt, "Time range is unrecognized: {}", line),
            ShiftError::Io(err) => write!(fmt, "{}", err),
        }
    }
}

impl From<io::Error> for ShiftError {
    fn from(err: io::Error) -> Self {
        ShiftError::Io(err)
    }
}
