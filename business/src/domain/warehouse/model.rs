use chrono::{DateTime, Utc};

/// An inventory item. Its id is only unique within the owning warehouse's list.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub plz: String,
    pub timestamp: DateTime<Utc>,
    pub product_data: Vec<Product>,
}

/// Every field of a warehouse except its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseProps {
    pub name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub plz: String,
    pub timestamp: DateTime<Utc>,
    pub product_data: Vec<Product>,
}

impl Warehouse {
    pub fn new(id: i32, props: WarehouseProps) -> Self {
        Self {
            id,
            name: props.name,
            street: props.street,
            city: props.city,
            country: props.country,
            plz: props.plz,
            timestamp: props.timestamp,
            product_data: props.product_data,
        }
    }

    /// Returns the first product with the given id, scanning in list order.
    pub fn find_product(&self, product_id: i32) -> Option<&Product> {
        self.product_data.iter().find(|p| p.id == product_id)
    }

    /// Replaces every field but `id`. The product list is swapped wholesale, never merged.
    pub fn overwrite(&mut self, props: WarehouseProps) {
        self.name = props.name;
        self.street = props.street;
        self.city = props.city;
        self.country = props.country;
        self.plz = props.plz;
        self.timestamp = props.timestamp;
        self.product_data = props.product_data;
    }
}
