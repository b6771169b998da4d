pub mod insights_routes;
pub mod rental_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/rental", rental_routes::create_rental_router())
        .nest("/api/insights", insights_routes::create_insights_router())
}
