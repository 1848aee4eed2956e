//! `stockroom-shell` — line-oriented console over the catalog.
//!
//! All console I/O lives here; the catalog itself never reads or writes.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use command::ShellCommand;
pub use config::Config;
pub use error::{ShellError, ShellResult};
pub use session::{Session, SessionEnd};
