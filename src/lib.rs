use std::error::Error as StdError;
use std::fmt;

mod dom;
mod host;
mod range;

pub use dom::{Document, Element, NodeId};
pub use host::{LabelsList, Meter, Progress};
pub use range::{AttributeSource, RangeProps, parse_float_attribute};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    ElementNotFound(String),
    TagMismatch {
        id: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound(id) => write!(f, "element not found: {id}"),
            Self::TagMismatch {
                id,
                expected,
                actual,
            } => write!(
                f,
                "tag mismatch for {id}: expected {expected}, actual {actual}"
            ),
        }
    }
}

impl StdError for Error {}
