use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::rental_controller::RentalController;
use crate::dto::rental_dto::{RentVehicleRequest, RentalResponse};
use crate::dto::vehicle_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new().route("/", post(rent_vehicle))
}

async fn rent_vehicle(
    State(state): State<AppState>,
    Json(request): Json<RentVehicleRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.rent(request).await?;
    Ok(Json(response))
}
