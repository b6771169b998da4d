//! Modelo de RentalRecord
//!
//! Registro inmutable que vincula un vehículo con una fecha de renta.
//! Se crea únicamente como efecto de una renta exitosa; nunca se
//! actualiza ni se elimina.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// RentalRecord - mapea exactamente a la tabla rentals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RentalRecord {
    pub id: i64,
    pub vehicle_id: i64,
    pub rental_date: NaiveDate,
}
