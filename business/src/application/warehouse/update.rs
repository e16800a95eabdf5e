use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;
use crate::domain::warehouse::repository::WarehouseRepository;
use crate::domain::warehouse::use_cases::update::{
    UpdateWarehouseParams, UpdateWarehouseUseCase,
};

pub struct UpdateWarehouseUseCaseImpl {
    pub repository: Arc<dyn WarehouseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateWarehouseUseCase for UpdateWarehouseUseCaseImpl {
    async fn execute(&self, params: UpdateWarehouseParams) -> Result<Warehouse, WarehouseError> {
        self.logger
            .info(&format!("Updating warehouse: {}", params.id));

        let Some(mut warehouse) = self.repository.find_by_id(params.id).await? else {
            self.logger
                .warn(&format!("Warehouse {} not found, nothing updated", params.id));
            return Err(WarehouseError::NotFound);
        };

        // Lookup and save are separate calls: concurrent updates resolve as last write wins.
        warehouse.overwrite(params.props);
        let saved = self.repository.save(&warehouse).await?;

        self.logger.info(&format!("Warehouse updated: {}", saved.id));
        Ok(saved)
    }
}
