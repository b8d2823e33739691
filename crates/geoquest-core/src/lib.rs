//! GeoQuest Core - quest domain, proximity-gated quiz state machine, and configuration
//!
//! This crate contains the core domain logic for the GeoQuest system: the quest
//! catalog, the player position model, and the tracker that gates questions on
//! physical proximity to a checkpoint.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod tracker;

pub use error::{QuestError, Result};
