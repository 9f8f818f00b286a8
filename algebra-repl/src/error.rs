use algebra_error::Error as ExprError;
use algebra_grade::validate::ValidationError;

/// Utility enum to package errors that can occur while setting up the question or running a
/// command.
#[derive(Debug)]
pub enum Error {
    /// The command line or a command was malformed.
    Usage(String),

    /// Problems found in the answers given on the command line.
    Validation(Vec<ValidationError>),

    /// An error that occurred while parsing or evaluating an expression.
    Expr(ExprError),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr. `input` is the text the spans of an
    /// expression error point into.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Usage(message) => eprintln!("error: {}", message),
            Self::Validation(errs) => errs.iter().for_each(ValidationError::report_to_stderr),
            Self::Expr(err) => err.report_to_stderr("input", input),
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errs: Vec<ValidationError>) -> Self {
        Self::Validation(errs)
    }
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::Expr(err)
    }
}
