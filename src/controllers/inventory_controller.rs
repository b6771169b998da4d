use sqlx::sqlite::SqlitePool;
use validator::Validate;

use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, UpdateAvailabilityRequest, VehicleResponse,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_not_empty;

pub struct InventoryController {
    repository: VehicleRepository,
}

impl InventoryController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // length(min = 1) deja pasar strings de solo espacios
        if validate_not_empty(&request.brand).is_err() {
            return Err(validation_error("brand", "La marca es requerida"));
        }
        if validate_not_empty(&request.model).is_err() {
            return Err(validation_error("model", "El modelo es requerido"));
        }

        // Crear vehículo
        let vehicle = self
            .repository
            .create(
                request.brand,
                request.model,
                request.year,
                request.status.as_flag(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "✅ Vehículo agregado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehículo", &id.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    /// Override administrativo: no consulta el historial de rentas
    pub async fn set_availability(
        &self,
        id: i64,
        request: UpdateAvailabilityRequest,
    ) -> Result<(), AppError> {
        let updated = self
            .repository
            .update_availability(id, request.status.as_flag())
            .await?;

        if updated == 0 {
            log::warn!(
                "Update de disponibilidad sobre vehículo inexistente: {}",
                id
            );
        }

        Ok(())
    }

    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if deleted == 0 {
            log::warn!("Delete sobre vehículo inexistente: {}", id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseConfig;
    use crate::database::connection::init_schema;
    use crate::models::vehicle::VehicleStatus;
    use crate::repositories::rental_repository::RentalRepository;
    use chrono::NaiveDate;

    async fn setup() -> SqlitePool {
        let pool = DatabaseConfig::create_test_pool().await.expect("test pool");
        init_schema(&pool).await.expect("schema");
        pool
    }

    fn request(brand: &str, model: &str, year: i32, status: VehicleStatus) -> CreateVehicleRequest {
        CreateVehicleRequest {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
            status,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_blank_brand_and_model() {
        let pool = setup().await;
        let controller = InventoryController::new(pool.clone());

        let result = controller
            .create(request("   ", "Corolla", 2020, VehicleStatus::Available))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = controller
            .create(request("Toyota", "", 2020, VehicleStatus::Available))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert!(controller.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_year_out_of_range() {
        let pool = setup().await;
        let controller = InventoryController::new(pool.clone());

        let result = controller
            .create(request("Toyota", "Corolla", 1985, VehicleStatus::Available))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = controller
            .create(request("Toyota", "Corolla", 2031, VehicleStatus::Available))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_maps_status_to_availability_flag() {
        let pool = setup().await;
        let controller = InventoryController::new(pool.clone());

        controller
            .create(request("Toyota", "Corolla", 2020, VehicleStatus::Available))
            .await
            .unwrap();
        controller
            .create(request("Honda", "Civic", 2019, VehicleStatus::NotAvailable))
            .await
            .unwrap();

        let listed = controller.list().await.unwrap();
        assert_eq!(listed[0].status, VehicleStatus::Available);
        assert_eq!(listed[1].status, VehicleStatus::NotAvailable);
    }

    #[tokio::test]
    async fn test_admin_override_reopens_rented_vehicle_and_keeps_record() {
        let pool = setup().await;
        let controller = InventoryController::new(pool.clone());
        let rentals = RentalRepository::new(pool.clone());

        let created = controller
            .create(request("Toyota", "Corolla", 2020, VehicleStatus::Available))
            .await
            .unwrap();
        let vehicle_id = created.data.unwrap().id;

        let rental_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        rentals.rent(vehicle_id, rental_date).await.unwrap();

        // El override no cierra ni borra el registro de renta abierto
        controller
            .set_availability(
                vehicle_id,
                UpdateAvailabilityRequest {
                    status: VehicleStatus::Available,
                },
            )
            .await
            .unwrap();

        let vehicle = controller.get_by_id(vehicle_id).await.unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Available);

        let records = rentals.find_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rental_date, rental_date);
    }

    #[tokio::test]
    async fn test_set_availability_and_remove_are_silent_on_unknown_id() {
        let pool = setup().await;
        let controller = InventoryController::new(pool.clone());

        controller
            .set_availability(
                999,
                UpdateAvailabilityRequest {
                    status: VehicleStatus::Available,
                },
            )
            .await
            .unwrap();
        controller.remove(999).await.unwrap();
    }
}
