use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::warehouse::model::{Product, Warehouse, WarehouseProps};

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductDto {
    /// Product id, unique within its warehouse
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            unit: product.unit,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            category: dto.category,
            quantity: dto.quantity,
            unit: dto.unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct WarehouseResponse {
    pub id: i32,
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    /// Postal code
    pub plz: String,
    pub timestamp: DateTime<Utc>,
    #[oai(rename = "productData")]
    pub product_data: Vec<ProductDto>,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(warehouse: Warehouse) -> Self {
        Self {
            id: warehouse.id,
            name: warehouse.name,
            street: warehouse.street,
            city: warehouse.city,
            country: warehouse.country,
            plz: warehouse.plz,
            timestamp: warehouse.timestamp,
            product_data: warehouse
                .product_data
                .into_iter()
                .map(ProductDto::from)
                .collect(),
        }
    }
}

/// Full warehouse payload for updates. Every field replaces the stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateWarehouseRequest {
    /// Ignored; the path id always wins
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i32>,
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    /// Postal code
    pub plz: String,
    pub timestamp: DateTime<Utc>,
    /// Replaces the stored product list as a whole
    #[oai(rename = "productData")]
    pub product_data: Vec<ProductDto>,
}

impl From<UpdateWarehouseRequest> for WarehouseProps {
    fn from(request: UpdateWarehouseRequest) -> Self {
        Self {
            name: request.name,
            street: request.street,
            city: request.city,
            country: request.country,
            plz: request.plz,
            timestamp: request.timestamp,
            product_data: request
                .product_data
                .into_iter()
                .map(Product::from)
                .collect(),
        }
    }
}
