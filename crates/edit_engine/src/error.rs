//! Error types for edit operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Nothing to undo")]
    UndoStackEmpty,

    #[error("Nothing to redo")]
    RedoStackEmpty,
}

pub type Result<T> = std::result::Result<T, EditError>;
