// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod host;
pub mod persistence;

pub use crate::config::FinderConfig;
pub use crate::core::engine::FinderEngine;
pub use crate::core::ranking::rank;
pub use crate::core::types::{CultureTag, RankedTranslation, Translation};
pub use crate::error::{FinderError, KeyError, Result};
pub use crate::fuzzy::{distance, Scorer};
