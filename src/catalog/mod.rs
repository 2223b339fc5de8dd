// src/catalog/mod.rs

pub mod client;
pub mod models;
