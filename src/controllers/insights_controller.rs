use sqlx::sqlite::SqlitePool;

use crate::dto::insights_dto::{BrandRentalsResponse, MonthlyRentalsResponse};
use crate::repositories::insights_repository::InsightsRepository;
use crate::utils::errors::AppError;

pub struct InsightsController {
    repository: InsightsRepository,
}

impl InsightsController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: InsightsRepository::new(pool),
        }
    }

    pub async fn rentals_by_brand(&self) -> Result<Vec<BrandRentalsResponse>, AppError> {
        let rows = self.repository.rentals_by_brand().await?;

        Ok(rows.into_iter().map(BrandRentalsResponse::from).collect())
    }

    pub async fn rentals_by_month(&self) -> Result<Vec<MonthlyRentalsResponse>, AppError> {
        let rows = self.repository.rentals_by_month().await?;

        Ok(rows.into_iter().map(MonthlyRentalsResponse::from).collect())
    }
}
