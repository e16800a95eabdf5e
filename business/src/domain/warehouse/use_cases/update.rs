use async_trait::async_trait;

use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::{Warehouse, WarehouseProps};

pub struct UpdateWarehouseParams {
    pub id: i32,
    pub props: WarehouseProps,
}

#[async_trait]
pub trait UpdateWarehouseUseCase: Send + Sync {
    async fn execute(&self, params: UpdateWarehouseParams) -> Result<Warehouse, WarehouseError>;
}
