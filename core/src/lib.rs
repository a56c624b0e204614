//! Schema provisioning and synthetic customer seeding for the
//! Testudo Bank demo database.

pub mod config;
pub mod customer_generator;
pub mod error;
pub mod fixtures;
pub mod name_generator;
pub mod rng;
pub mod seeder;
pub mod store;
pub mod types;
