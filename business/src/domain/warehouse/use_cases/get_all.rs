use async_trait::async_trait;

use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;

#[async_trait]
pub trait GetAllWarehousesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Warehouse>, WarehouseError>;
}
