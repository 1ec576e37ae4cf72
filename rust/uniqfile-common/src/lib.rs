//! Core definitions (error types and result helpers), relied upon by all uniqfile-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
