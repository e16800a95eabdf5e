use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Warehouse;

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Inserts the warehouse or replaces every column of an existing row with the same id.
    async fn save(&self, warehouse: &Warehouse) -> Result<Warehouse, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Warehouse>, RepositoryError>;
}
