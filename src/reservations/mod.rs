// Reservation writer: validation, pricing, and the atomic
// reservation + cashback + counter transaction

pub mod error;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod service;

pub use error::ReservationError;
pub use models::{CreateReservationRequest, ItemType, Reservation, ReservationResponse};
pub use repository::ReservationRepository;
pub use service::ReservationService;
