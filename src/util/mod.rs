//! Shared utilities

pub mod fs;
pub mod xml;

pub use fs::{FileSystem, RealFileSystem};
pub use xml::XmlElement;
