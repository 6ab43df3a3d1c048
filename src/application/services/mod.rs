//! Business logic services orchestrating domain operations.

pub mod click_service;
pub mod link_service;
pub mod stats_service;

pub use click_service::ClickService;
pub use link_service::LinkService;
pub use stats_service::{LinkReport, StatsService};
