use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::inventory_controller::InventoryController;
use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, UpdateAvailabilityRequest, VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/availability", put(update_availability))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    controller.set_availability(id, request).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "✅ Estado del vehículo actualizado exitosamente"
    })))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    controller.remove(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "🗑️ Vehículo eliminado exitosamente"
    })))
}
