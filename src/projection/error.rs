use crate::types::field::PointKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Unknown field '{field}' for a {kind}")]
    UnknownField { field: String, kind: PointKind },
}
