//! Configuración de conexión a SQLite
//!
//! Este módulo maneja la conexión a la base de datos SQLite y la
//! creación del schema al arranque.

use anyhow::Result;
use sqlx::sqlite::SqlitePool;

use crate::config::database::DatabaseConfig;

/// Conexión a la base de datos con el schema inicializado
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear la conexión con una configuración explícita
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        init_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Crear la conexión con la configuración del entorno
    pub async fn new_default() -> Result<Self> {
        Self::new(&DatabaseConfig::default()).await
    }

    /// Obtener el pool de conexiones
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Crear las tablas si no existen
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            brand TEXT NOT NULL,
            model TEXT NOT NULL,
            year INTEGER NOT NULL,
            availability INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rentals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_id INTEGER NOT NULL,
            rental_date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
