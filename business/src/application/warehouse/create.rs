use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;
use crate::domain::warehouse::repository::WarehouseRepository;
use crate::domain::warehouse::services::WarehouseDataGenerator;
use crate::domain::warehouse::use_cases::create::{
    CreateWarehouseParams, CreateWarehouseUseCase,
};

pub struct CreateWarehouseUseCaseImpl {
    pub repository: Arc<dyn WarehouseRepository>,
    pub generator: Arc<dyn WarehouseDataGenerator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateWarehouseUseCase for CreateWarehouseUseCaseImpl {
    async fn execute(&self, params: CreateWarehouseParams) -> Result<Warehouse, WarehouseError> {
        self.logger
            .info(&format!("Generating sample warehouse: {}", params.id));

        let warehouse = self.generator.generate(params.id);
        let saved = self.repository.save(&warehouse).await?;

        self.logger.info(&format!(
            "Warehouse {} saved with {} products",
            saved.id,
            saved.product_data.len()
        ));
        Ok(saved)
    }
}
