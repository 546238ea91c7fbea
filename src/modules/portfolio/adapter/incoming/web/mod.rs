pub mod pages;
pub mod routes;
pub mod views;
pub mod visitor;
