#![cfg_attr(not(test), no_std)]
//! A value that is either a success or a failure, never both, never neither.
//!
//! ```
//! use outcome::{Error, Kind, Outcome};
//!
//! const NOT_FOUND: Error = Error::new("http", 404, "not found");
//!
//! let doubled = Outcome::<u32>::success(5).map(|x| x * 2);
//! assert_eq!(doubled, Outcome::success(10));
//!
//! let missing: Outcome<u32> = Outcome::failure(NOT_FOUND);
//! assert_eq!(missing.map(|x| x * 2).kind(), Kind::Failure);
//! ```

#[macro_use]
extern crate delog;
generate_macros!();

mod error;
pub use error::{Error, Result};
mod kind;
pub use kind::Kind;
mod outcome;
pub use outcome::Outcome;
