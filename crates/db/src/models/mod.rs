//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update DTO where the entity is mutable

pub mod document;
pub mod project;
