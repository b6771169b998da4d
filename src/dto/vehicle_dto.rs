use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, message = "La marca es requerida"))]
    pub brand: String,

    #[validate(length(min = 1, message = "El modelo es requerido"))]
    pub model: String,

    #[validate(range(min = 1990, max = 2030, message = "El año debe estar entre 1990 y 2030"))]
    pub year: i32,

    pub status: VehicleStatus,
}

// Request para actualizar la disponibilidad de un vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub status: VehicleStatus,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub status: VehicleStatus,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            status: VehicleStatus::from_flag(vehicle.availability),
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
