use super::model::Warehouse;

/// Produces sample warehouse records used to seed the store.
pub trait WarehouseDataGenerator: Send + Sync {
    /// Builds a warehouse whose `id` equals the given id. Never performs I/O.
    fn generate(&self, id: i32) -> Warehouse;
}
