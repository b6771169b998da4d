//! Modelos de Insights
//!
//! Filas agregadas para los reportes de rentas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Total de rentas por marca
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandRentals {
    pub brand: String,
    pub total_rentals: i64,
}

/// Total de rentas por mes calendario (1-12)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyRentals {
    pub month: i64,
    pub total_rentals: i64,
}
