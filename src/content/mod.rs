//! Content module - the compiled-in blog content and its registry

pub mod catalog;
mod entry;
mod markdown;
mod registry;

pub use entry::{ContentEntry, PostBody};
pub use markdown::{html_escape, MarkdownRenderer};
pub use registry::{Category, Registry, RegistryBuilder, RegistryError};
