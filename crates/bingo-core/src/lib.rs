//! Core types and traits for the bingo card service.
//!
//! This crate provides the domain types shared by the card writer, the
//! storage adapters and the HTTP gateway, together with the repository
//! contracts the writer depends on.

pub mod analytics;
pub mod card;
pub mod code;
pub mod customization;
pub mod error;
pub mod grid;
pub mod repository;
pub mod service;
pub mod signup;

pub use analytics::AnalyticsEvent;
pub use card::{CardRecord, NewCard};
pub use code::{CardCode, CODE_ALPHABET, CODE_LENGTH};
pub use customization::{Customization, Theme};
pub use error::{CardError, CoreError, StorageError};
pub use grid::{CardGrid, FREE_CELL, FREE_CELL_INDEX, GRID_CELLS};
pub use repository::{CardRepository, EventRepository, SignupRepository};
pub use service::CardService;
pub use signup::PoolSignup;
