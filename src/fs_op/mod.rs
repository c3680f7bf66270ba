//! Filesystem helpers: path classification, directory listing and output
//! writes.

pub mod error;
pub mod list;
pub mod stat;
pub mod write;

pub use error::FsOpError;
pub use list::list_files;
pub use stat::PathType;
pub use write::atomic_write;
