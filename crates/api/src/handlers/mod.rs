pub mod category;
pub mod media;
pub mod navigation;
pub mod pages;
pub mod search;
pub mod video;
