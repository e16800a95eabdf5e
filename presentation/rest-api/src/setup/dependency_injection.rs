use std::sync::Arc;

use logger::TracingLogger;
use persistence::warehouse::repository::WarehouseRepositoryPostgres;
use simulation::warehouse_simulation::WarehouseSimulation;

use business::application::warehouse::create::CreateWarehouseUseCaseImpl;
use business::application::warehouse::get_all::GetAllWarehousesUseCaseImpl;
use business::application::warehouse::get_by_id::GetWarehouseByIdUseCaseImpl;
use business::application::warehouse::get_product::GetProductUseCaseImpl;
use business::application::warehouse::update::UpdateWarehouseUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::warehouse::routes::WarehouseApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub warehouse_api: WarehouseApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let warehouse_repository = Arc::new(WarehouseRepositoryPostgres::new(pool));
        let generator = Arc::new(WarehouseSimulation::new());

        // Warehouse use cases
        let create_use_case = Arc::new(CreateWarehouseUseCaseImpl {
            repository: warehouse_repository.clone(),
            generator,
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllWarehousesUseCaseImpl {
            repository: warehouse_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetWarehouseByIdUseCaseImpl {
            repository: warehouse_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductUseCaseImpl {
            repository: warehouse_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateWarehouseUseCaseImpl {
            repository: warehouse_repository,
            logger,
        });

        let warehouse_api = WarehouseApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_product_use_case,
            update_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            warehouse_api,
        }
    }
}
