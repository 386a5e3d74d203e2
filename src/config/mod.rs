//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → line.rs (scan each connection line into spans)
//!     → params.rs (decode the trailing parameter block)
//!     → profile::builder (defaults + parameters → ConnectionProfile)
//!     → registry (insert; read-only lookups afterwards)
//! ```
//!
//! # Design Decisions
//! - Connection definitions keep their compact `name => scheme://...`
//!   line syntax; the TOML file only carries the lines and the
//!   process-wide defaults
//! - All defaults can be overridden in the file; absent fields fall
//!   back to built-in values
//! - A failing line aborts startup unless `skip_invalid` is set

pub mod defaults;
pub mod line;
pub mod loader;
pub mod params;

pub use defaults::ConnectionDefaults;
pub use line::{parse_line, ParseError, ParsedLine};
pub use loader::{
    build_registry, load_config, register_line, ConfigError, ConnectionError, HttpClientConfig,
};
pub use params::{decode, Param};
