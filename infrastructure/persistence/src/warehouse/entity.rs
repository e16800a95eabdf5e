use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::warehouse::model::{Product, Warehouse, WarehouseProps};

/// One element of the `product_data` JSONB array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity,
            unit: product.unit.clone(),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            quantity: record.quantity,
            unit: record.unit,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct WarehouseEntity {
    pub id: i32,
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub plz: String,
    pub recorded_at: DateTime<Utc>,
    pub product_data: Json<Vec<ProductRecord>>,
}

impl WarehouseEntity {
    pub fn from_domain(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id,
            name: warehouse.name.clone(),
            street: warehouse.street.clone(),
            city: warehouse.city.clone(),
            country: warehouse.country.clone(),
            plz: warehouse.plz.clone(),
            recorded_at: warehouse.timestamp,
            product_data: Json(warehouse.product_data.iter().map(ProductRecord::from).collect()),
        }
    }

    pub fn into_domain(self) -> Warehouse {
        Warehouse::new(
            self.id,
            WarehouseProps {
                name: self.name,
                street: self.street,
                city: self.city,
                country: self.country,
                plz: self.plz,
                timestamp: self.recorded_at,
                product_data: self.product_data.0.into_iter().map(Product::from).collect(),
            },
        )
    }
}
