use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Product;
use crate::domain::warehouse::repository::WarehouseRepository;
use crate::domain::warehouse::use_cases::get_product::{GetProductParams, GetProductUseCase};

pub struct GetProductUseCaseImpl {
    pub repository: Arc<dyn WarehouseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductUseCase for GetProductUseCaseImpl {
    async fn execute(&self, params: GetProductParams) -> Result<Product, WarehouseError> {
        self.logger.info(&format!(
            "Fetching product {} from warehouse {}",
            params.product_id, params.warehouse_id
        ));

        let warehouse = self
            .repository
            .find_by_id(params.warehouse_id)
            .await?
            .ok_or(WarehouseError::NotFound)?;

        warehouse
            .find_product(params.product_id)
            .cloned()
            .ok_or(WarehouseError::ProductNotFound)
    }
}
