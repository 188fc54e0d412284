//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Request/query DTOs for the operations on that table

pub mod category;
pub mod comic;
pub mod friend_link;
pub mod media;
pub mod novel;
pub mod picture;
pub mod search;
pub mod setting;
pub mod tag;
pub mod video;
