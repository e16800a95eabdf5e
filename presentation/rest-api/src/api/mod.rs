pub mod error;
pub mod health {
    pub mod routes;
}
pub mod tags;
pub mod warehouse {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
