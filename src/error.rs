use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub type DtlzResult<T> = Result<T, DtlzError>;

/// Errors raised while building or evaluating a DTLZ problem.
#[derive(Debug)]
pub enum DtlzError {
    /// `n_obj` is zero or larger than `n_var`, so the distance tail would be empty.
    InvalidDimension {
        n_var: usize,
        n_obj: usize,
    },
    /// A decision or objective buffer does not have the length the problem expects.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A JSON problem configuration could not be parsed.
    InvalidConfig(serde_json::Error),
}

impl Display for DtlzError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { n_var, n_obj } => {
                write!(
                    f,
                    "cannot spread {n_obj} objectives over {n_var} variables, need 1 <= objectives <= variables"
                )
            }
            Self::LengthMismatch { what, expected, found } => {
                write!(f, "{what} vector has {found} entries but problem expects {expected}")
            }
            Self::InvalidConfig(err) => write!(f, "invalid problem configuration: {err}"),
        }
    }
}

impl Error for DtlzError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DtlzError {
    fn from(err: serde_json::Error) -> Self {
        DtlzError::InvalidConfig(err)
    }
}
