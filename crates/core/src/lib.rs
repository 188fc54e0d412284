//! Domain logic for the media catalog: pagination, listing filters, input
//! validation and randomized selection. No I/O lives here.

pub mod assets;
pub mod error;
pub mod listing;
pub mod media;
pub mod navigation;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod types;
pub mod validation;
