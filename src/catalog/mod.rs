// Destination catalog: mountains and their category-tagged info items

pub mod handlers;
pub mod models;
pub mod repository;
pub mod slug;

pub use models::{InfoCategory, InfoItem, Mountain};
pub use repository::{InfoItemRepository, MountainRepository};
