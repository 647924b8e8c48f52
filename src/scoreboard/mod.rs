// Scoreboard: competitive ranking of travellers and prize awards

pub mod handlers;
pub mod models;
pub mod ranker;
pub mod repository;
pub mod service;

pub use models::Standing;
pub use repository::ScoreboardRepository;
pub use service::ScoreboardService;
