use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::{Json, PlainText},
};

use business::domain::warehouse::use_cases::create::{
    CreateWarehouseParams, CreateWarehouseUseCase,
};
use business::domain::warehouse::use_cases::get_all::GetAllWarehousesUseCase;
use business::domain::warehouse::use_cases::get_by_id::{
    GetWarehouseByIdParams, GetWarehouseByIdUseCase,
};
use business::domain::warehouse::use_cases::get_product::{GetProductParams, GetProductUseCase};
use business::domain::warehouse::use_cases::update::{
    UpdateWarehouseParams, UpdateWarehouseUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::warehouse::dto::{ProductDto, UpdateWarehouseRequest, WarehouseResponse};

const SAVED: &str = "Saved";

pub struct WarehouseApi {
    create_use_case: Arc<dyn CreateWarehouseUseCase>,
    get_all_use_case: Arc<dyn GetAllWarehousesUseCase>,
    get_by_id_use_case: Arc<dyn GetWarehouseByIdUseCase>,
    get_product_use_case: Arc<dyn GetProductUseCase>,
    update_use_case: Arc<dyn UpdateWarehouseUseCase>,
}

impl WarehouseApi {
    pub fn new(
        create_use_case: Arc<dyn CreateWarehouseUseCase>,
        get_all_use_case: Arc<dyn GetAllWarehousesUseCase>,
        get_by_id_use_case: Arc<dyn GetWarehouseByIdUseCase>,
        get_product_use_case: Arc<dyn GetProductUseCase>,
        update_use_case: Arc<dyn UpdateWarehouseUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_product_use_case,
            update_use_case,
        }
    }
}

/// Warehouse inventory API
///
/// Endpoints for seeding, listing, reading, and replacing warehouse records.
#[OpenApi]
impl WarehouseApi {
    /// Add a sample warehouse
    ///
    /// Generates sample data for the given id and stores it, replacing any
    /// warehouse with the same id.
    #[oai(path = "/add", method = "post", tag = "ApiTags::Warehouses")]
    async fn add_warehouse(&self, id: Query<i32>) -> AddWarehouseResponse {
        match self
            .create_use_case
            .execute(CreateWarehouseParams { id: id.0 })
            .await
        {
            Ok(_) => AddWarehouseResponse::Ok(PlainText(SAVED.to_string())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddWarehouseResponse::InternalError(json)
            }
        }
    }

    /// List all warehouses
    #[oai(path = "/all", method = "get", tag = "ApiTags::Warehouses")]
    async fn get_all_warehouses(&self) -> GetAllWarehousesResponse {
        match self.get_all_use_case.execute().await {
            Ok(warehouses) => GetAllWarehousesResponse::Ok(Json(
                warehouses.into_iter().map(WarehouseResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllWarehousesResponse::InternalError(json)
            }
        }
    }

    /// Get a warehouse by ID
    #[oai(path = "/warehouse/:id", method = "get", tag = "ApiTags::Warehouses")]
    async fn get_warehouse_by_id(&self, id: Path<i32>) -> GetWarehouseResponse {
        match self
            .get_by_id_use_case
            .execute(GetWarehouseByIdParams { id: id.0 })
            .await
        {
            Ok(warehouse) => GetWarehouseResponse::Ok(Json(warehouse.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetWarehouseResponse::NotFound(json),
                    _ => GetWarehouseResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product of a warehouse
    ///
    /// Scans the warehouse's product list in order and returns the first
    /// product with the requested id.
    #[oai(
        path = "/warehouse/:warehouse_id/product/:product_id",
        method = "get",
        tag = "ApiTags::Warehouses"
    )]
    async fn get_product_by_id(
        &self,
        warehouse_id: Path<i32>,
        product_id: Path<i32>,
    ) -> GetProductResponse {
        match self
            .get_product_use_case
            .execute(GetProductParams {
                warehouse_id: warehouse_id.0,
                product_id: product_id.0,
            })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a warehouse
    ///
    /// Overwrites every field and the whole product list of an existing
    /// warehouse. Unknown ids are not created.
    #[oai(path = "/warehouse/:id", method = "put", tag = "ApiTags::Warehouses")]
    async fn update_warehouse(
        &self,
        id: Path<i32>,
        body: Json<UpdateWarehouseRequest>,
    ) -> UpdateWarehouseResponse {
        let params = UpdateWarehouseParams {
            id: id.0,
            props: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(warehouse) => UpdateWarehouseResponse::Ok(Json(warehouse.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateWarehouseResponse::NotFound(json),
                    _ => UpdateWarehouseResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddWarehouseResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllWarehousesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WarehouseResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWarehouseResponse {
    #[oai(status = 200)]
    Ok(Json<WarehouseResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateWarehouseResponse {
    #[oai(status = 200)]
    Ok(Json<WarehouseResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use business::application::warehouse::create::CreateWarehouseUseCaseImpl;
    use business::application::warehouse::get_all::GetAllWarehousesUseCaseImpl;
    use business::application::warehouse::get_by_id::GetWarehouseByIdUseCaseImpl;
    use business::application::warehouse::get_product::GetProductUseCaseImpl;
    use business::application::warehouse::update::UpdateWarehouseUseCaseImpl;
    use business::domain::errors::RepositoryError;
    use business::domain::logger::Logger;
    use business::domain::warehouse::model::{Product, Warehouse, WarehouseProps};
    use business::domain::warehouse::repository::WarehouseRepository;
    use logger::TracingLogger;
    use simulation::warehouse_simulation::WarehouseSimulation;

    use super::*;

    #[derive(Default)]
    struct InMemoryWarehouseRepository {
        rows: Mutex<BTreeMap<i32, Warehouse>>,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl WarehouseRepository for InMemoryWarehouseRepository {
        async fn save(&self, warehouse: &Warehouse) -> Result<Warehouse, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.rows
                .lock()
                .unwrap()
                .insert(warehouse.id, warehouse.clone());
            Ok(warehouse.clone())
        }

        async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Warehouse>, RepositoryError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }
    }

    struct UnavailableWarehouseRepository;

    #[async_trait]
    impl WarehouseRepository for UnavailableWarehouseRepository {
        async fn save(&self, _warehouse: &Warehouse) -> Result<Warehouse, RepositoryError> {
            Err(RepositoryError::DatabaseError)
        }

        async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError> {
            Err(RepositoryError::DatabaseError)
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Warehouse>, RepositoryError> {
            Err(RepositoryError::DatabaseError)
        }
    }

    fn api_with(repository: Arc<dyn WarehouseRepository>) -> WarehouseApi {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        WarehouseApi::new(
            Arc::new(CreateWarehouseUseCaseImpl {
                repository: repository.clone(),
                generator: Arc::new(WarehouseSimulation::new()),
                logger: logger.clone(),
            }),
            Arc::new(GetAllWarehousesUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetWarehouseByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateWarehouseUseCaseImpl { repository, logger }),
        )
    }

    fn product(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity: 30,
            unit: "pack".to_string(),
        }
    }

    fn warehouse(id: i32, products: Vec<Product>) -> Warehouse {
        Warehouse::new(
            id,
            WarehouseProps {
                name: "St. Poelten Nord".to_string(),
                street: "Porschestrasse 33".to_string(),
                city: "St. Poelten".to_string(),
                country: "Austria".to_string(),
                plz: "3100".to_string(),
                timestamp: Utc.with_ymd_and_hms(2025, 9, 1, 6, 0, 0).unwrap(),
                product_data: products,
            },
        )
    }

    fn update_request() -> UpdateWarehouseRequest {
        UpdateWarehouseRequest {
            id: Some(999),
            name: "Krems Hafen".to_string(),
            street: "Hafenstrasse 2".to_string(),
            city: "Krems".to_string(),
            country: "Austria".to_string(),
            plz: "3500".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 2, 14, 9, 15, 0).unwrap(),
            product_data: vec![ProductDto {
                id: 4,
                name: "Butter".to_string(),
                category: "Dairy".to_string(),
                quantity: 12,
                unit: "pack".to_string(),
            }],
        }
    }

    async fn stored(repository: &InMemoryWarehouseRepository, warehouse: Warehouse) {
        repository.save(&warehouse).await.unwrap();
        repository.writes.store(0, Ordering::SeqCst);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_warehouse() {
        let api = api_with(Arc::new(InMemoryWarehouseRepository::default()));

        let response = api.get_warehouse_by_id(Path(12)).await;

        assert!(matches!(response, GetWarehouseResponse::NotFound(_)));
    }

    #[tokio::test]
    async fn should_return_exact_stored_warehouse() {
        let repository = Arc::new(InMemoryWarehouseRepository::default());
        stored(&repository, warehouse(2, vec![product(1, "Milk")])).await;
        let api = api_with(repository);

        let GetWarehouseResponse::Ok(Json(body)) = api.get_warehouse_by_id(Path(2)).await else {
            panic!("expected stored warehouse");
        };

        assert_eq!(body, WarehouseResponse::from(warehouse(2, vec![product(1, "Milk")])));
    }

    #[tokio::test]
    async fn should_save_generated_warehouse_under_requested_id() {
        let api = api_with(Arc::new(InMemoryWarehouseRepository::default()));

        let AddWarehouseResponse::Ok(PlainText(text)) = api.add_warehouse(Query(5)).await else {
            panic!("expected confirmation text");
        };
        assert_eq!(text, "Saved");

        let GetWarehouseResponse::Ok(Json(body)) = api.get_warehouse_by_id(Path(5)).await else {
            panic!("expected generated warehouse");
        };
        assert_eq!(body.id, 5);
        assert!(!body.product_data.is_empty());
    }

    #[tokio::test]
    async fn should_list_every_stored_warehouse() {
        let api = api_with(Arc::new(InMemoryWarehouseRepository::default()));
        api.add_warehouse(Query(1)).await;
        api.add_warehouse(Query(2)).await;

        let GetAllWarehousesResponse::Ok(Json(all)) = api.get_all_warehouses().await else {
            panic!("expected warehouse list");
        };

        let ids: Vec<i32> = all.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn should_return_first_product_when_ids_repeat() {
        let repository = Arc::new(InMemoryWarehouseRepository::default());
        stored(
            &repository,
            warehouse(
                1,
                vec![product(3, "Milk"), product(7, "Cream"), product(7, "Yoghurt")],
            ),
        )
        .await;
        let api = api_with(repository);

        let GetProductResponse::Ok(Json(found)) = api.get_product_by_id(Path(1), Path(7)).await
        else {
            panic!("expected product");
        };

        assert_eq!(found.name, "Cream");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product_in_existing_warehouse() {
        let repository = Arc::new(InMemoryWarehouseRepository::default());
        stored(&repository, warehouse(1, vec![product(3, "Milk")])).await;
        let api = api_with(repository);

        let response = api.get_product_by_id(Path(1), Path(8)).await;

        assert!(matches!(response, GetProductResponse::NotFound(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_for_product_of_unknown_warehouse() {
        let api = api_with(Arc::new(InMemoryWarehouseRepository::default()));

        let response = api.get_product_by_id(Path(40), Path(1)).await;

        assert!(matches!(response, GetProductResponse::NotFound(_)));
    }

    #[tokio::test]
    async fn should_replace_every_field_on_update() {
        let repository = Arc::new(InMemoryWarehouseRepository::default());
        stored(
            &repository,
            warehouse(6, vec![product(1, "Milk"), product(2, "Cheese")]),
        )
        .await;
        let api = api_with(repository);

        let UpdateWarehouseResponse::Ok(Json(updated)) =
            api.update_warehouse(Path(6), Json(update_request())).await
        else {
            panic!("expected updated warehouse");
        };
        let GetWarehouseResponse::Ok(Json(reloaded)) = api.get_warehouse_by_id(Path(6)).await
        else {
            panic!("expected reloaded warehouse");
        };

        let request = update_request();
        assert_eq!(updated, reloaded);
        assert_eq!(reloaded.id, 6);
        assert_eq!(reloaded.name, request.name);
        assert_eq!(reloaded.street, request.street);
        assert_eq!(reloaded.city, request.city);
        assert_eq!(reloaded.country, request.country);
        assert_eq!(reloaded.plz, request.plz);
        assert_eq!(reloaded.timestamp, request.timestamp);
        assert_eq!(reloaded.product_data, request.product_data);
    }

    #[tokio::test]
    async fn should_not_write_when_updating_unknown_warehouse() {
        let repository = Arc::new(InMemoryWarehouseRepository::default());
        stored(&repository, warehouse(1, vec![])).await;
        let api = api_with(repository.clone());

        let response = api.update_warehouse(Path(2), Json(update_request())).await;

        assert!(matches!(response, UpdateWarehouseResponse::NotFound(_)));
        assert_eq!(repository.writes.load(Ordering::SeqCst), 0);
        let GetAllWarehousesResponse::Ok(Json(all)) = api.get_all_warehouses().await else {
            panic!("expected warehouse list");
        };
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_storage_unavailable() {
        let api = api_with(Arc::new(UnavailableWarehouseRepository));

        assert!(matches!(
            api.add_warehouse(Query(1)).await,
            AddWarehouseResponse::InternalError(_)
        ));
        assert!(matches!(
            api.get_all_warehouses().await,
            GetAllWarehousesResponse::InternalError(_)
        ));
        assert!(matches!(
            api.get_warehouse_by_id(Path(1)).await,
            GetWarehouseResponse::InternalError(_)
        ));
    }
}
