//! Generate WiX component fragments from the files of a build output
//! directory.
//!
//! ```no_run
//! use wixgen::generator::{generate, GeneratorConfig};
//!
//! let mut config = GeneratorConfig::new(r"..\App\bin\$(Configuration)\net8.0-windows");
//! config.configuration = "Debug".to_owned();
//! let xml = generate(&config)?;
//! println!("{}", xml);
//! # Ok::<(), wixgen::errors::GenerateError>(())
//! ```

pub mod cli;
pub mod errors;
pub mod fs_op;
pub mod generator;
pub mod logging;
pub mod render;
pub mod settings;
pub mod template;

pub use crate::errors::GenerateError;
pub use crate::fs_op::list_files;
pub use crate::generator::{generate, run, GeneratorConfig, Report};
pub use crate::render::{render, ComponentGroup};
pub use crate::template::{resolve, PathTemplate};
