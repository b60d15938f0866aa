//! File primitives for autowire
//!
//! Provides atomic output writes, format-agnostic config loading and an
//! order-preserving `.properties` reader used for mapping tables.

pub mod config;
pub mod error;
pub mod io;
pub mod properties;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use properties::Properties;
