// Visitor feedback: public submission, admin review

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::Feedback;
pub use repository::FeedbackRepository;
