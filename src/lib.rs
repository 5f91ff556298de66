#![deny(clippy::suspicious)]
#![warn(clippy::pedantic)]
#![warn(let_underscore_drop)]
// Allows need to be after warn/deny
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! Inventory tracker which keeps item names in a singly linked list.
//!
//! The core of the crate is [`ItemList`]. [`Session`] drives an `ItemList` from a text menu read
//! from any `BufRead` and written to any `Write`.

mod command;
mod config;
mod list;
mod session;

pub use command::{Command, ParseCommandError};
pub use config::{Config, DisplayFormat};
pub use list::{ItemList, Iter, ListError};
pub use session::{Outcome, Request, Session};

include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));

/// Package version together with the compiler version the crate was built with
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built with ",
    env!("INVENTORY_RUSTC_VERSION"),
    ")"
);

/// Returns a human readable version string for the crate, including the compiler version it was
/// built with.
#[must_use]
pub fn version_info() -> String {
    format!("{} {LONG_VERSION}", env!("CARGO_PKG_NAME"))
}
