use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::errors::RepositoryError;
use business::domain::warehouse::model::Warehouse;
use business::domain::warehouse::repository::WarehouseRepository;

use super::entity::WarehouseEntity;
use crate::error::map_sqlx_error;

pub struct WarehouseRepositoryPostgres {
    pool: PgPool,
}

impl WarehouseRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for WarehouseRepositoryPostgres {
    async fn save(&self, warehouse: &Warehouse) -> Result<Warehouse, RepositoryError> {
        let entity = WarehouseEntity::from_domain(warehouse);

        // Single-row upsert: the product list is replaced together with the scalar columns.
        let saved = sqlx::query_as::<_, WarehouseEntity>(
            r#"INSERT INTO warehouses (id, name, street, city, country, plz, recorded_at, product_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                street = EXCLUDED.street,
                city = EXCLUDED.city,
                country = EXCLUDED.country,
                plz = EXCLUDED.plz,
                recorded_at = EXCLUDED.recorded_at,
                product_data = EXCLUDED.product_data
            RETURNING id, name, street, city, country, plz, recorded_at, product_data"#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.street)
        .bind(&entity.city)
        .bind(&entity.country)
        .bind(&entity.plz)
        .bind(entity.recorded_at)
        .bind(Json(&entity.product_data.0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("warehouse.save", e))?;

        Ok(saved.into_domain())
    }

    async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError> {
        let entities = sqlx::query_as::<_, WarehouseEntity>(
            "SELECT id, name, street, city, country, plz, recorded_at, product_data FROM warehouses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("warehouse.find_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Warehouse>, RepositoryError> {
        let entity = sqlx::query_as::<_, WarehouseEntity>(
            "SELECT id, name, street, city, country, plz, recorded_at, product_data FROM warehouses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("warehouse.find_by_id", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
