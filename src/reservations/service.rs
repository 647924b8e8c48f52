use uuid::Uuid;
use validator::Validate;

use crate::profiles::ProfileRepository;
use crate::reservations::error::ReservationError;
use crate::reservations::models::{
    CreateReservationRequest, ItemType, Reservation, ReservationResponse,
};
use crate::reservations::pricing;
use crate::reservations::repository::ReservationRepository;
use crate::validation::{validate_reservation_date, validate_time_format};

/// Service for the reservation flow: validation, item resolution,
/// pricing, balance check, and the atomic write
#[derive(Clone)]
pub struct ReservationService {
    repository: ReservationRepository,
    profiles: ProfileRepository,
}

impl ReservationService {
    pub fn new(repository: ReservationRepository, profiles: ProfileRepository) -> Self {
        Self {
            repository,
            profiles,
        }
    }

    /// Create a reservation for the authenticated traveller
    pub async fn create_reservation(
        &self,
        user_id: Uuid,
        request: CreateReservationRequest,
    ) -> Result<ReservationResponse, ReservationError> {
        request
            .validate()
            .map_err(|e| ReservationError::ValidationError(e.to_string()))?;
        validate_time_format(&request.time)
            .map_err(|_| ReservationError::ValidationError("Time must be HH:MM".to_string()))?;
        validate_reservation_date(&request.date).map_err(|_| {
            ReservationError::ValidationError("Date cannot be in the past".to_string())
        })?;

        match request.item_type {
            ItemType::InfoItem => {
                let item_name = self
                    .repository
                    .find_info_item_name(request.item_id)
                    .await?
                    .ok_or(ReservationError::ItemNotFound(request.item_id))?;

                let reservation = self
                    .repository
                    .create_with_rewards(user_id, &request, &item_name, None)
                    .await?;

                Ok(ReservationResponse {
                    reservation,
                    coupon_applied: false,
                })
            }
            ItemType::Tour => {
                let item = self
                    .repository
                    .find_tour_item(request.item_id)
                    .await?
                    .ok_or(ReservationError::ItemNotFound(request.item_id))?;

                let quote =
                    pricing::quote(item.price, item.has_coupon, request.coupon_code.as_deref());

                let profile = self
                    .profiles
                    .find_by_user_id(user_id)
                    .await?
                    .ok_or(ReservationError::ProfileNotFound(user_id))?;

                if profile.balance < quote.final_price {
                    return Err(ReservationError::InsufficientBalance {
                        required: quote.final_price,
                        available: profile.balance,
                    });
                }

                let reservation = self
                    .repository
                    .create_with_rewards(user_id, &request, &item.name, Some(&quote))
                    .await?;

                tracing::info!(
                    "Reservation {} created for tour {} at {}",
                    reservation.id,
                    item.name,
                    quote.final_price
                );

                Ok(ReservationResponse {
                    reservation,
                    coupon_applied: quote.coupon_applied,
                })
            }
        }
    }

    /// All reservations, newest first
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ReservationError> {
        Ok(self.repository.list_all().await?)
    }
}
