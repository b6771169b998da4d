use sqlx::sqlite::SqlitePool;
use validator::ValidationErrors;

use crate::dto::rental_dto::{RentVehicleRequest, RentalResponse};
use crate::dto::vehicle_dto::ApiResponse;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct RentalController {
    repository: RentalRepository,
}

impl RentalController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RentalRepository::new(pool),
        }
    }

    pub async fn rent(
        &self,
        request: RentVehicleRequest,
    ) -> Result<ApiResponse<RentalResponse>, AppError> {
        // Validar la fecha (YYYY-MM-DD)
        let rental_date = validate_date(&request.rental_date).map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("rental_date", e);
            AppError::Validation(errors)
        })?;

        let rental_id = self
            .repository
            .rent(request.vehicle_id, rental_date)
            .await?;

        Ok(ApiResponse::success_with_message(
            RentalResponse {
                id: rental_id,
                vehicle_id: request.vehicle_id,
                rental_date: rental_date.to_string(),
            },
            "🚘 Vehículo rentado exitosamente".to_string(),
        ))
    }
}
