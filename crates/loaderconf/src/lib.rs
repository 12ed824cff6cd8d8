//! # loaderconf
//!
//! Loaderconf edits small `key value` configuration files, such as
//! systemd-boot's `loader.conf`, **without disturbing anything it was not asked
//! to change**. Comments, blank lines, key order, spacing, unknown keys and
//! line endings all survive a load/save cycle byte for byte.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Models (systemd_boot.rs)                                   │
//! │  - Static attribute tables + typed boundary conversions     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (config_file.rs)                                │
//! │  - load/save, absent-file and permission policy             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document + Parser (document.rs, parser.rs)                 │
//! │  - Lossless line model, first-match key operations          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Storage trait; FsStorage (production), MemStorage (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing here writes to stdout/stderr or exits the process. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Example
//!
//! ```
//! use loaderconf::{LoaderConf, MemStorage};
//!
//! let storage = MemStorage::new().with_file("/boot/efi/loader/loader.conf", "timeout 10\n");
//! let mut conf = LoaderConf::<&MemStorage>::open(&storage, "/boot/efi/loader/loader.conf")?;
//!
//! conf.set_menu_timeout("15");
//! assert!(conf.save()?);
//! assert_eq!(storage.contents("/boot/efi/loader/loader.conf").unwrap(), "timeout 15\n");
//! # Ok::<(), loaderconf::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`parser`]: text ⇄ [`Document`]
//! - [`document`]: entries and key-level editing
//! - [`attributes`]: attribute tables and the [`ConfigModel`] trait
//! - [`config_file`]: the load/save controller
//! - [`store`]: storage abstraction and implementations
//! - [`systemd_boot`]: the `loader.conf` model
//! - [`error`]: error types

pub mod attributes;
pub mod config_file;
pub mod document;
pub mod error;
pub mod parser;
pub mod store;
pub mod systemd_boot;

pub use attributes::{AttributeDef, AttributeValue, ConfigModel};
pub use config_file::{ConfigFile, LoadState};
pub use document::{Document, Entry, Spacing};
pub use error::{Error, Result};
pub use store::{FsStorage, MemStorage, Storage};
pub use systemd_boot::{ConsoleMode, LoaderConf, MenuTimeout, SystemdBoot};
