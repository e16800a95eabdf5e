pub mod db;
mod error;
pub mod user {
    pub mod entity;
    pub mod repository;
}
pub mod warehouse {
    pub mod entity;
    pub mod repository;
}
