//! Storage layer for booth-budget
//!
//! Loads the static percentage table and writes first-run defaults. Nothing
//! computed by the engine is persisted.

pub mod file_io;
pub mod init;
pub mod table;

pub use file_io::{read_structured, write_json_atomic, FileFormat};
pub use init::{initialize_storage, needs_initialization};
pub use table::{default_budget_data, load_table, resolve_table, TableSource};
