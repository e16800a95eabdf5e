use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::warehouse::errors::WarehouseError;
use crate::domain::warehouse::model::Warehouse;
use crate::domain::warehouse::repository::WarehouseRepository;
use crate::domain::warehouse::use_cases::get_by_id::{
    GetWarehouseByIdParams, GetWarehouseByIdUseCase,
};

pub struct GetWarehouseByIdUseCaseImpl {
    pub repository: Arc<dyn WarehouseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWarehouseByIdUseCase for GetWarehouseByIdUseCaseImpl {
    async fn execute(&self, params: GetWarehouseByIdParams) -> Result<Warehouse, WarehouseError> {
        self.logger
            .info(&format!("Fetching warehouse by id: {}", params.id));

        self.repository
            .find_by_id(params.id)
            .await?
            .ok_or(WarehouseError::NotFound)
    }
}
