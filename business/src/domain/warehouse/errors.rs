#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    #[error("warehouse.not_found")]
    NotFound,
    #[error("warehouse.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
