pub mod catalog;
pub mod orders;
pub mod register;
pub mod tables;
