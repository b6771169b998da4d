use serde::Serialize;

use crate::models::insights::{BrandRentals, MonthlyRentals};

// Response de rentas por marca
#[derive(Debug, Serialize)]
pub struct BrandRentalsResponse {
    pub brand: String,
    pub total_rentals: i64,
}

impl From<BrandRentals> for BrandRentalsResponse {
    fn from(row: BrandRentals) -> Self {
        Self {
            brand: row.brand,
            total_rentals: row.total_rentals,
        }
    }
}

// Response de rentas por mes (1-12); los meses sin rentas no aparecen
#[derive(Debug, Serialize)]
pub struct MonthlyRentalsResponse {
    pub month: i32,
    pub total_rentals: i64,
}

impl From<MonthlyRentals> for MonthlyRentalsResponse {
    fn from(row: MonthlyRentals) -> Self {
        Self {
            month: row.month as i32,
            total_rentals: row.total_rentals,
        }
    }
}
