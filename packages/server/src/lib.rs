// Excel tools - API core
//
// Reads the product-description column of uploaded order sheets, refines it
// through a chat completion service, and falls back to the cleaned original
// whenever refinement is unavailable.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
