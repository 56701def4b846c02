pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod recognition {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
