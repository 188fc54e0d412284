//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The four media tables share
//! their listing, lookup and delete queries through [`MediaRepo`].

pub mod category_repo;
pub mod comic_repo;
pub mod friend_link_repo;
pub mod media_repo;
pub mod novel_repo;
pub mod picture_repo;
pub mod search_repo;
pub mod setting_repo;
pub mod tag_repo;
pub mod video_repo;

pub use category_repo::CategoryRepo;
pub use comic_repo::ComicRepo;
pub use friend_link_repo::FriendLinkRepo;
pub use media_repo::MediaRepo;
pub use novel_repo::NovelRepo;
pub use picture_repo::PictureRepo;
pub use search_repo::SearchRepo;
pub use setting_repo::SettingRepo;
pub use tag_repo::TagRepo;
pub use video_repo::VideoRepo;
