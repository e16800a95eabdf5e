use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;
use crate::domain::warehouse::repository::WarehouseRepository;
use crate::domain::warehouse::use_cases::get_all::GetAllWarehousesUseCase;

pub struct GetAllWarehousesUseCaseImpl {
    pub repository: Arc<dyn WarehouseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWarehousesUseCase for GetAllWarehousesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Warehouse>, WarehouseError> {
        self.logger.info("Fetching all warehouses");
        let warehouses = self.repository.find_all().await?;
        self.logger
            .info(&format!("Found {} warehouses", warehouses.len()));
        Ok(warehouses)
    }
}
