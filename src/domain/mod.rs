//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces, and the validation capability
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_validator`] - Fraud-validation capability for visits
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod click_validator;
pub mod entities;
pub mod repositories;
