//! # Storage Layer
//!
//! A config model never touches the filesystem directly. It goes through a
//! [`Storage`] handle supplied by the caller, which only has to:
//!
//! - read a whole file into a string
//! - write a whole string to a file
//! - create a directory (with ancestors)
//! - tell whether a directory exists
//!
//! ## Implementations
//!
//! - [`FsStorage`]: the real filesystem, with an optional target root for
//!   installers working on a mounted system. Writes go to a temp file that is
//!   renamed over the target, so a failed write never leaves a truncated file.
//! - [`MemStorage`]: for testing logic without filesystem I/O, with switches
//!   for simulating read and write failures.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::Storage;
pub use fs_backend::FsStorage;
pub use mem_backend::MemStorage;
