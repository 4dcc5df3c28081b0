//! Variable substitution engine for editor configuration values
//!
//! Resolves the small `${...}` template language embedded in configuration
//! strings against the state of an editing environment: the active file,
//! cursor and selections, workspace roots (default and named), process
//! environment, and nested configuration values.
//!
//! # Architecture
//!
//! ```text
//!              ConfigService (entry point)
//!                   |
//!     +-------------+-------------+
//!     |             |             |
//!  lookup        engine       ResolutionCache
//!  (dotted     (serialize,    (one editor
//!   paths)      token pass,    context)
//!               deserialize)
//!                   |
//!             Environment accessors
//!                   |
//!      EditorHost / ProcessEnv / ConfigSource   (varsub-host)
//! ```
//!
//! Tokens that cannot be resolved stay verbatim; the only fatal failure is
//! a substituted document that no longer parses as JSON.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use varsub_core::ConfigService;
//! use varsub_host::SystemEnv;
//!
//! let service = ConfigService::new(store, editor, Arc::new(SystemEnv::new()));
//! let resolved = service.get_config(Some("tasks.build")).await?;
//! ```

mod catalog;
mod engine;
mod environment;

pub mod cache;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod service;

pub use cache::ResolutionCache;
pub use error::{Error, Result};
pub use service::ConfigService;
