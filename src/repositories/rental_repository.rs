use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use crate::models::rental::RentalRecord;
use crate::utils::errors::AppError;

pub struct RentalRepository {
    pool: SqlitePool,
}

impl RentalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Rentar un vehículo
    ///
    /// El check de disponibilidad, el insert del registro y el flip de la
    /// bandera se aplican dentro de una sola transacción: dos intentos
    /// simultáneos sobre el mismo vehículo no pueden ganar ambos.
    pub async fn rent(&self, vehicle_id: i64, rental_date: NaiveDate) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        // Compare-and-swap sobre la bandera: solo gana quien la encuentra en 1
        let claimed =
            sqlx::query("UPDATE vehicles SET availability = 0 WHERE id = ? AND availability = 1")
                .bind(vehicle_id)
                .execute(&mut *tx)
                .await?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotAvailable(format!(
                "Vehículo {} no disponible o ID inválido",
                vehicle_id
            )));
        }

        let record = sqlx::query("INSERT INTO rentals (vehicle_id, rental_date) VALUES (?, ?)")
            .bind(vehicle_id)
            .bind(rental_date)
            .execute(&mut *tx)
            .await?;

        let rental_id = record.last_insert_rowid();
        tx.commit().await?;

        log::info!("🚘 Vehículo {} rentado (registro {})", vehicle_id, rental_id);
        Ok(rental_id)
    }

    pub async fn find_all(&self) -> Result<Vec<RentalRecord>, AppError> {
        let rentals = sqlx::query_as::<_, RentalRecord>("SELECT * FROM rentals ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseConfig;
    use crate::database::connection::init_schema;
    use crate::repositories::vehicle_repository::VehicleRepository;

    async fn setup() -> SqlitePool {
        let pool = DatabaseConfig::create_test_pool().await.expect("test pool");
        init_schema(&pool).await.expect("schema");
        pool
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[tokio::test]
    async fn test_rent_flips_availability_and_records_transaction() {
        let pool = setup().await;
        let vehicles = VehicleRepository::new(pool.clone());
        let rentals = RentalRepository::new(pool.clone());

        let vehicle = vehicles
            .create("Toyota".to_string(), "Corolla".to_string(), 2020, true)
            .await
            .unwrap();

        let rental_id = rentals.rent(vehicle.id, date(2024, 5, 1)).await.unwrap();
        assert_eq!(rental_id, 1);

        assert_eq!(
            vehicles.get_availability(vehicle.id).await.unwrap(),
            Some(false)
        );

        let records = rentals.find_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vehicle_id, vehicle.id);
        assert_eq!(records[0].rental_date, date(2024, 5, 1));
    }

    #[tokio::test]
    async fn test_rent_unavailable_vehicle_is_rejected_without_record() {
        let pool = setup().await;
        let vehicles = VehicleRepository::new(pool.clone());
        let rentals = RentalRepository::new(pool.clone());

        let vehicle = vehicles
            .create("Honda".to_string(), "Civic".to_string(), 2019, false)
            .await
            .unwrap();

        let result = rentals.rent(vehicle.id, date(2024, 6, 15)).await;
        assert!(matches!(result, Err(AppError::NotAvailable(_))));

        assert!(rentals.find_all().await.unwrap().is_empty());
        assert_eq!(
            vehicles.get_availability(vehicle.id).await.unwrap(),
            Some(false)
        );
    }

    #[tokio::test]
    async fn test_rent_unknown_vehicle_is_rejected() {
        let pool = setup().await;
        let rentals = RentalRepository::new(pool.clone());

        let result = rentals.rent(999, date(2024, 6, 15)).await;
        assert!(matches!(result, Err(AppError::NotAvailable(_))));
        assert!(rentals.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_rent_attempts_have_exactly_one_winner() {
        let pool = setup().await;
        let vehicles = VehicleRepository::new(pool.clone());

        let vehicle = vehicles
            .create("Ford".to_string(), "Focus".to_string(), 2021, true)
            .await
            .unwrap();

        let first = RentalRepository::new(pool.clone());
        let second = RentalRepository::new(pool.clone());
        let (a, b) = tokio::join!(
            first.rent(vehicle.id, date(2024, 7, 1)),
            second.rent(vehicle.id, date(2024, 7, 1))
        );

        let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);

        let loser = if a.is_ok() { b } else { a };
        assert!(matches!(loser, Err(AppError::NotAvailable(_))));

        assert_eq!(
            vehicles.get_availability(vehicle.id).await.unwrap(),
            Some(false)
        );
        assert_eq!(first.find_all().await.unwrap().len(), 1);
    }
}
