use async_trait::async_trait;

use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;

pub struct CreateWarehouseParams {
    pub id: i32,
}

#[async_trait]
pub trait CreateWarehouseUseCase: Send + Sync {
    async fn execute(&self, params: CreateWarehouseParams) -> Result<Warehouse, WarehouseError>;
}
