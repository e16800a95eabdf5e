use async_trait::async_trait;

use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Product;

pub struct GetProductParams {
    pub warehouse_id: i32,
    pub product_id: i32,
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, params: GetProductParams) -> Result<Product, WarehouseError>;
}
