// Agent company applications and their approval lifecycle

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{Company, CompanyStatus};
pub use repository::CompanyRepository;
