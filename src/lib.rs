//! `texttools` is a library to transform text through chains of named operations.
//!
//! A command such as `trim->remove('!')->title_case` is parsed into operations
//! ([`command`]), resolved against the registry of available operations
//! ([`validator`], [`transforms`]), bound to typed arguments ([`binder`]) and finally
//! applied to the text, either as a whole or line by line ([`processor`]).
//!
//! "Hello world" example:
//! ```
//! use texttools::processor::{run_command, Options};
//!
//! let options = Options::default();
//! let result = run_command("  hello world!  ", "trim->remove('!')->title_case", &options);
//! assert_eq!(result.unwrap(), "Hello world");
//! ```

pub mod binder;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod log;
pub mod processor;
pub mod transforms;
pub mod validator;
pub mod value;

/// The texttools prelude
///
/// This module re-exports the most commonly used items from texttools.
/// You can use it with `use texttools::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::error::{Error, Result};
    pub use crate::processor::{Options, TextProcessor};
    pub use crate::transforms::TransformRegistry;
    pub use crate::value::Value;

    // Re-export commonly used functions
    pub use crate::processor::run_command;
}
