//! Shared error type for the ellipt elliptic-curve workspace.

#![forbid(unsafe_code)]

mod error;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
