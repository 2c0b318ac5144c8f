use thiserror::Error;

/// Why a report body could not be decoded.
///
/// Malformed reports are routine in historical archives, so callers are expected
/// to branch on this rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Report is empty")]
    Empty,

    #[error("Report for station {0} is NIL")]
    Nil(String),

    #[error("Missing or invalid station identifier, found '{0}'")]
    MissingStation(String),

    #[error("Missing or invalid observation time group, found '{0}'")]
    MissingTime(String),

    #[error("Unparsed groups in report: {}", .0.join(" "))]
    UnparsedGroups(Vec<String>),
}
