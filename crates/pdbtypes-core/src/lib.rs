#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared building blocks for pdbtypes.
//!
//! - [`ByteReader`]: the sequential cursor every record decoder reads from
//! - [`ReadError`]: what a read reports when the range runs out
//! - [`Colors`]: ANSI palette for human-readable dumps

mod colors;
mod error;
mod reader;


pub use colors::Colors;
pub use error::ReadError;
pub use reader::ByteReader;
