use chrono::{SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use business::domain::warehouse::model::{Product, Warehouse, WarehouseProps};
use business::domain::warehouse::services::WarehouseDataGenerator;

const MAX_PRODUCTS: i32 = 10;
const MAX_QUANTITY: i32 = 10_000;

/// (city, postal code, country)
static SITES: &[(&str, &str, &str)] = &[
    ("Wien", "1110", "Austria"),
    ("Linz", "4020", "Austria"),
    ("Graz", "8054", "Austria"),
    ("Salzburg", "5020", "Austria"),
    ("Innsbruck", "6020", "Austria"),
    ("Muenchen", "80331", "Germany"),
    ("Nuernberg", "90402", "Germany"),
    ("Zuerich", "8004", "Switzerland"),
    ("Bratislava", "82109", "Slovakia"),
    ("Brno", "60200", "Czech Republic"),
];

static DISTRICTS: &[&str] = &["Nord", "Sued", "Ost", "West", "Hafen", "Zentrum", "Logistikpark"];

static STREETS: &[&str] = &[
    "Industriestrasse",
    "Lagerhausgasse",
    "Hafenstrasse",
    "Gewerbepark",
    "Bahnhofstrasse",
    "Dieselweg",
    "Speditionsstrasse",
];

/// (name, category, unit)
static CATALOG: &[(&str, &str, &str)] = &[
    ("Apple Juice", "Beverages", "crate"),
    ("Mineral Water", "Beverages", "crate"),
    ("Orange Lemonade", "Beverages", "crate"),
    ("Whole Milk", "Dairy", "pack"),
    ("Butter", "Dairy", "pack"),
    ("Spaghetti", "Dry Goods", "box"),
    ("Basmati Rice", "Dry Goods", "bag"),
    ("Wheat Flour", "Dry Goods", "bag"),
    ("Dish Soap", "Household", "bottle"),
    ("Laundry Detergent", "Household", "bottle"),
    ("Paper Towels", "Household", "pack"),
    ("Wood Screws", "Hardware", "box"),
    ("Wall Plugs", "Hardware", "box"),
    ("Cordless Drill", "Tools", "pcs"),
    ("Claw Hammer", "Tools", "pcs"),
];

/// Generates sample warehouses. Every field except `timestamp` depends only on the id.
#[derive(Debug, Default)]
pub struct WarehouseSimulation;

impl WarehouseSimulation {
    pub fn new() -> Self {
        Self
    }

    fn products(rng: &mut StdRng) -> Vec<Product> {
        let count = rng.random_range(1..=MAX_PRODUCTS);
        (1..=count)
            .map(|id| {
                let (name, category, unit) = *CATALOG.choose(rng).unwrap_or(&CATALOG[0]);
                Product {
                    id,
                    name: name.to_string(),
                    category: category.to_string(),
                    quantity: rng.random_range(0..=MAX_QUANTITY),
                    unit: unit.to_string(),
                }
            })
            .collect()
    }
}

impl WarehouseDataGenerator for WarehouseSimulation {
    fn generate(&self, id: i32) -> Warehouse {
        let mut rng = StdRng::seed_from_u64(i64::from(id) as u64);

        let (city, plz, country) = *SITES.choose(&mut rng).unwrap_or(&SITES[0]);
        let district = DISTRICTS.choose(&mut rng).unwrap_or(&DISTRICTS[0]);
        let street = STREETS.choose(&mut rng).unwrap_or(&STREETS[0]);
        let house_number = rng.random_range(1..=200);

        Warehouse::new(
            id,
            WarehouseProps {
                name: format!("{} {}", city, district),
                street: format!("{} {}", street, house_number),
                city: city.to_string(),
                country: country.to_string(),
                plz: plz.to_string(),
                timestamp: Utc::now().trunc_subsecs(0),
                product_data: Self::products(&mut rng),
            },
        )
    }
}
