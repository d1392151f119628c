// crates/ethercat-esi/src/error.rs

use quick_xml::errors::serialize::SeError;
use std::fmt;

/// Errors that can occur while parsing a report or generating the XML.
#[derive(Debug)]
pub enum EsiError {
    /// One of the report line patterns failed to compile.
    Pattern(regex::Error),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// A captured number does not fit the width of its field.
    FieldOverflow { field: &'static str, line: usize },

    /// A PDO entry line appeared before any PDO header line.
    EntryWithoutPdo { line: usize },

    /// A PDO entry carries a bit length no EtherCAT data type can express.
    InvalidBitLength {
        /// 1-based report line, when the entry came from a parsed report.
        line: Option<usize>,
        index: u16,
        subindex: u8,
        bit_len: u16,
    },
}

impl EsiError {
    /// Attaches a report line number to errors that can carry one.
    pub(crate) fn with_line(self, line: usize) -> Self {
        match self {
            EsiError::InvalidBitLength {
                index,
                subindex,
                bit_len,
                ..
            } => EsiError::InvalidBitLength {
                line: Some(line),
                index,
                subindex,
                bit_len,
            },
            other => other,
        }
    }
}

impl From<regex::Error> for EsiError {
    fn from(e: regex::Error) -> Self {
        EsiError::Pattern(e)
    }
}

impl From<SeError> for EsiError {
    fn from(e: SeError) -> Self {
        EsiError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for EsiError {
    fn from(e: fmt::Error) -> Self {
        EsiError::FmtError(e)
    }
}

impl fmt::Display for EsiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsiError::Pattern(e) => write!(f, "report pattern error: {}", e),
            EsiError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            EsiError::FmtError(e) => write!(f, "formatting error: {}", e),
            EsiError::FieldOverflow { field, line } => {
                write!(f, "line {}: {} out of range", line, field)
            }
            EsiError::EntryWithoutPdo { line } => {
                write!(f, "line {}: PDO entry precedes any PDO header", line)
            }
            EsiError::InvalidBitLength {
                line,
                index,
                subindex,
                bit_len,
            } => {
                if let Some(line) = line {
                    write!(f, "line {}: ", line)?;
                }
                write!(
                    f,
                    "invalid bit length {} for PDO entry 0x{:04x}:{:02x}",
                    bit_len, index, subindex
                )
            }
        }
    }
}

impl std::error::Error for EsiError {}
