//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (HTTP backends, filesystem).

pub mod api;
pub mod app_config;
pub mod lookup;
pub mod storage;
