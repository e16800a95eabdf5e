use async_trait::async_trait;

use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;

pub struct GetWarehouseByIdParams {
    pub id: i32,
}

#[async_trait]
pub trait GetWarehouseByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetWarehouseByIdParams) -> Result<Warehouse, WarehouseError>;
}
