use serde::{Deserialize, Serialize};

// Request para rentar un vehículo
#[derive(Debug, Deserialize)]
pub struct RentVehicleRequest {
    pub vehicle_id: i64,
    // Fecha en formato YYYY-MM-DD
    pub rental_date: String,
}

// Response de renta
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub rental_date: String,
}
