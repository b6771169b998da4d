use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::insights_controller::InsightsController;
use crate::dto::insights_dto::{BrandRentalsResponse, MonthlyRentalsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_insights_router() -> Router<AppState> {
    Router::new()
        .route("/rentals-by-brand", get(rentals_by_brand))
        .route("/rentals-by-month", get(rentals_by_month))
}

async fn rentals_by_brand(
    State(state): State<AppState>,
) -> Result<Json<Vec<BrandRentalsResponse>>, AppError> {
    let controller = InsightsController::new(state.pool.clone());
    let response = controller.rentals_by_brand().await?;
    Ok(Json(response))
}

async fn rentals_by_month(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyRentalsResponse>>, AppError> {
    let controller = InsightsController::new(state.pool.clone());
    let response = controller.rentals_by_month().await?;
    Ok(Json(response))
}
