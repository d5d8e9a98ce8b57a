//! # bridge-options
//!
//! Dynamic option value model shared between the host runtime and connectors.
//!
//! The host runtime hands connectors an untyped, string-keyed bag of options.
//! This crate pins that bag down to a closed set of value shapes so the rest
//! of the bridge can match exhaustively instead of inspecting types at
//! runtime.
//!
//! ## Example
//!
//! ```rust
//! use bridge_options::{OptionMap, OptionValue};
//!
//! let mut options = OptionMap::new();
//! options.insert("jdbcUrl", OptionValue::from("jdbc:h2:mem:test"));
//! options.insert("maximumPoolSize", OptionValue::from(10));
//!
//! assert_eq!(options.len(), 2);
//! assert_eq!(
//!     options.get("maximumPoolSize").map(OptionValue::string_value),
//!     Some("10".to_string()),
//! );
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod map;
pub mod value;

pub use map::OptionMap;
pub use value::OptionValue;
