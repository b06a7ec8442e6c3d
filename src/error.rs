use thiserror::Error;

/// Exit status for anything the user can fix by changing the command line.
pub const EXIT_USAGE: u8 = 2;

/// Exit status for failures after validation (e.g. stdout closed).
pub const EXIT_RUNTIME: u8 = 4;

/// Which catalog a descriptor was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Jammer,
    Fitting,
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptorKind::Jammer => f.write_str("jammer"),
            DescriptorKind::Fitting => f.write_str("fitting"),
        }
    }
}

/// Input rejected before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("unknown {kind}: {text}")]
    UnrecognizedDescriptor { kind: DescriptorKind, text: String },

    #[error("{0}")]
    MissingRequiredInput(String),

    #[error("{name} out of range: {value} (expected {expected})")]
    OutOfRangeParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl CalcError {
    pub fn out_of_range(name: &'static str, value: impl ToString, expected: &'static str) -> Self {
        CalcError::OutOfRangeParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}

/// Error surfaced by the binary: a message plus the process exit status.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::new(EXIT_USAGE, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
