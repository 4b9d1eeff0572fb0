//! Error types for entity API
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use sea_orm::error::DbErr;

/// Errors while executing operations related to entities.
/// The intent is to categorize errors into two major types:
///  * Errors related to data. Ex DbError::RecordNotFound
///  * Errors related to interactions with the database itself. Ex DbError::Conn
#[derive(Debug, PartialEq)]
pub struct Error {
    // Underlying error emitted from seaORM internals
    pub source: Option<DbErr>,
    // Enum representing which category of error
    pub error_kind: EntityApiErrorKind,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum EntityApiErrorKind {
    // No row for the requested key, or it belongs to another owner
    RecordNotFound,
    // Update matched nothing
    RecordNotUpdated,
    // Errors related to interactions with the database itself. Ex DbError::Conn
    SystemError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Entity API Error {:?}: {source}", self.error_kind),
            None => write!(f, "Entity API Error {:?}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        let error_kind = match err {
            DbErr::RecordNotFound(_) => EntityApiErrorKind::RecordNotFound,
            DbErr::RecordNotUpdated => EntityApiErrorKind::RecordNotUpdated,
            _ => EntityApiErrorKind::SystemError,
        };
        Error {
            source: Some(err),
            error_kind,
        }
    }
}

pub(crate) fn not_found() -> Error {
    Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_are_categorized() {
        let missing: Error = DbErr::RecordNotFound("todos".to_string()).into();
        assert_eq!(missing.error_kind, EntityApiErrorKind::RecordNotFound);

        let stale: Error = DbErr::RecordNotUpdated.into();
        assert_eq!(stale.error_kind, EntityApiErrorKind::RecordNotUpdated);

        let conn: Error = DbErr::Custom("connection reset".to_string()).into();
        assert_eq!(conn.error_kind, EntityApiErrorKind::SystemError);
        assert!(conn.to_string().contains("connection reset"));
    }
}
