// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

use crate::types::FieldId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field {id}: buffer cannot grow to {required} bytes (at most {feasible})")]
    SetupOverflow {
        id: FieldId,
        required: usize,
        feasible: usize,
    },
    #[error("field {id} exceeds the fixed position set bound of {bound}")]
    IdOutOfRange { id: FieldId, bound: usize },
    #[error("field {id}: resize to {requested} bytes rejected (feasible: {feasible})")]
    ResizeRejected {
        id: FieldId,
        requested: usize,
        feasible: usize,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}
