//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Xml(quick_xml::Error),
    Serde(serde_json::Error),
    Regex(regex::Error),
    Segmentation(sakurs_core::ApiError),
    /// A unit the surface-form expander has no lookup entry for.
    UnknownUnit(String),
    /// A sentence group without triples reached record emission.
    EmptySubgroup {
        file: PathBuf,
        entry: String,
        lex: Option<String>,
    },
    MalformedTriple(String),
    MalformedEntity(String),
    UnknownSplit(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Xml(e) => write!(f, "xml error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Regex(e) => write!(f, "regex error: {}", e),
            Error::Segmentation(e) => write!(f, "sentence segmentation error: {}", e),
            Error::UnknownUnit(unit) => write!(f, "{} is unknown", unit),
            Error::EmptySubgroup { file, entry, lex } => write!(
                f,
                "empty triple group in {:?} (entry {}, lex {:?})",
                file, entry, lex
            ),
            Error::MalformedTriple(raw) => write!(f, "malformed triple: {:?}", raw),
            Error::MalformedEntity(raw) => write!(f, "malformed entity mapping: {:?}", raw),
            Error::UnknownSplit(s) => write!(f, "unknown split {:?} (train, dev, test)", s),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Error {
        Error::Xml(quick_xml::Error::InvalidAttr(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<sakurs_core::ApiError> for Error {
    fn from(e: sakurs_core::ApiError) -> Error {
        Error::Segmentation(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
