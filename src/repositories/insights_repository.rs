use sqlx::sqlite::SqlitePool;

use crate::models::insights::{BrandRentals, MonthlyRentals};
use crate::utils::errors::AppError;

pub struct InsightsRepository {
    pool: SqlitePool,
}

impl InsightsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Total de rentas por marca
    ///
    /// Solo marcas con al menos una renta; los registros cuyo vehículo fue
    /// eliminado no resuelven el join y se descartan.
    pub async fn rentals_by_brand(&self) -> Result<Vec<BrandRentals>, AppError> {
        let rows = sqlx::query_as::<_, BrandRentals>(
            r#"
            SELECT v.brand AS brand, COUNT(*) AS total_rentals
            FROM rentals r
            JOIN vehicles v ON r.vehicle_id = v.id
            GROUP BY v.brand
            ORDER BY v.brand
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total de rentas por mes calendario, ascendente
    ///
    /// Los meses sin rentas se omiten; el front end rellena el eje de 12 meses.
    pub async fn rentals_by_month(&self) -> Result<Vec<MonthlyRentals>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyRentals>(
            r#"
            SELECT CAST(strftime('%m', rental_date) AS INTEGER) AS month, COUNT(*) AS total_rentals
            FROM rentals
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
