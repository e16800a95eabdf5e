pub mod warehouse_simulation;
