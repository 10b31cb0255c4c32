//! Helper functions shared by the generator and server

mod url;

pub use url::*;
