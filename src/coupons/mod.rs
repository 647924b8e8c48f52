// Coupon ledger: welcome bonuses, cashback rewards, and point claims

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::CouponError;
pub use models::Coupon;
pub use repository::CouponRepository;
pub use service::CouponService;

use rust_decimal::Decimal;

/// Coupon every new traveller receives at registration
pub const WELCOME_COUPON_CODE: &str = "WELCOME10";
pub const WELCOME_COUPON_DESCRIPTION: &str = "Welcome bonus - 10% off on selected tours";

/// Points the welcome coupon credits when claimed
pub const WELCOME_COUPON_POINTS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
