// Agent-published tours and their moderation lifecycle

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{Tour, TourStatus};
pub use repository::TourRepository;
