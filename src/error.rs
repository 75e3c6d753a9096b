use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

/// The registry an operation was resolved from
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    #[strum(serialize = "chainable")]
    Chainable,
    #[strum(serialize = "scalar")]
    Scalar,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to parse operation \"{0}\"")]
    Parse(String),
    #[error("no operations supplied in command")]
    EmptyCommand,
    #[error("unknown operation \"{0}\"")]
    UnknownOperation(String),
    #[error("operation \"{0}\" is not chainable and can only be used as the first and only operation")]
    NotChainable(String),
    #[error("invalid argument \"{argument}\" for operation \"{operation}\"")]
    InvalidArgument { operation: String, argument: String },
    #[error("error executing operation \"{operation}\". Cause : {cause}")]
    TransformExecution { operation: String, cause: String },
    #[error("configuration unavailable. Cause : {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse configuration file {file:?}. Cause : {cause}")]
    SerdeTomlError { file: String, cause: String },
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { cause: String },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Builds a `TransformExecution` error for the given operation
    pub fn execution<O, C>(operation: O, cause: C) -> Self
    where
        O: Into<String>,
        C: ToString,
    {
        Error::TransformExecution {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }

    /// Whether the error was raised while handling the command string
    /// (parsing, validation, binding or execution)
    pub fn is_command_error(&self) -> bool {
        matches!(
            self,
            Error::Parse(_)
                | Error::EmptyCommand
                | Error::UnknownOperation(_)
                | Error::NotChainable(_)
                | Error::InvalidArgument { .. }
                | Error::TransformExecution { .. }
        )
    }
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigError(_)
        | Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError { file: _, cause: _ }
        | Error::InterpolationError { cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        e if e.is_command_error() => {
            writeln!(output, "{}: {}", Red.paint("[command error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[texttools error]"), error).ok();
        }
    };
}
