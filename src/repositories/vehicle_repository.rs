use sqlx::sqlite::SqlitePool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        brand: String,
        model: String,
        year: i32,
        availability: bool,
    ) -> Result<Vehicle, AppError> {
        let result = sqlx::query(
            "INSERT INTO vehicles (brand, model, year, availability) VALUES (?, ?, ?, ?)",
        )
        .bind(&brand)
        .bind(&model)
        .bind(year)
        .bind(availability)
        .execute(&self.pool)
        .await?;

        Ok(Vehicle {
            id: result.last_insert_rowid(),
            brand,
            model,
            year,
            availability,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    // Tocar cero filas con un id desconocido no es un error (contrato silencioso)
    pub async fn update_availability(&self, id: i64, availability: bool) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE vehicles SET availability = ? WHERE id = ?")
            .bind(availability)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn get_availability(&self, id: i64) -> Result<Option<bool>, AppError> {
        let row: Option<(bool,)> = sqlx::query_as("SELECT availability FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.0))
    }
}
