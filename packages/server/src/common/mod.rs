// Shared types used across domains
pub mod table;

pub use table::{Cell, Table, TableError};
