// Traveller profiles: demographics, point balance, attendance counter

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{UpdateProfileRequest, UserProfile};
pub use repository::ProfileRepository;
