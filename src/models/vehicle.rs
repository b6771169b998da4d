//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su etiqueta de disponibilidad.
//! Mapea exactamente al schema SQLite con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado del vehículo - etiqueta de la bandera de disponibilidad
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    #[serde(rename = "Not Available", alias = "Unavailable")]
    NotAvailable,
}

impl VehicleStatus {
    /// Convertir la etiqueta a la bandera booleana persistida
    pub fn as_flag(self) -> bool {
        self == VehicleStatus::Available
    }

    /// Convertir la bandera persistida a etiqueta
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            VehicleStatus::Available
        } else {
            VehicleStatus::NotAvailable
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub availability: bool,
}
