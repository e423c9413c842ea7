pub mod catalog_service;
pub mod order_service;
pub mod register_service;
pub mod table_service;
