// src/error.rs

//! Error kinds shared by the allocator and the surface backends.
//!
//! Keyboard resolution has no error type: a missing mapping is the keysym
//! `0` / "no symbol", never a failure.

use nix::errno::Errno;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Memory could not be created, sized or mapped. Nothing was leaked; the
    /// caller may retry with smaller dimensions.
    #[error("allocation failed: {context}")]
    AllocationFailure {
        context: String,
        #[source]
        source: Option<Errno>,
    },

    /// The window system rejected a request. The object it was issued
    /// against is left in its prior valid state.
    #[error("window system rejected request: {0}")]
    ProtocolFailure(String),

    /// Every generated shared-memory name collided with an existing object.
    #[error("could not find a free shared memory name after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// An operation was issued against a destroyed surface. This is a caller
    /// bug and is not recoverable.
    #[error("surface used after destroy")]
    UseAfterDestroy,

    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl Error {
    pub(crate) fn allocation(context: impl Into<String>, source: Errno) -> Self {
        Error::AllocationFailure {
            context: context.into(),
            source: Some(source),
        }
    }

    pub(crate) fn allocation_msg(context: impl Into<String>) -> Self {
        Error::AllocationFailure {
            context: context.into(),
            source: None,
        }
    }
}
