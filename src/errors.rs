//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate.
///
/// Building and measuring a tree cannot fail. Only the destination of a
/// [walk](crate::Node::walk) can.
#[derive(Error, Debug)]
pub enum NullObjectError {
    #[error("Could not write to the output sink: {0}")]
    Sink(#[from] std::io::Error),
}
