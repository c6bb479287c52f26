// src/lib.rs

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod market;
pub mod price;
pub mod progress;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod html;

#[cfg(feature = "cli")]
pub mod cli;

pub use board::{ PriceBoard, PriceCard, SectionState, SyndicateSection, Tier };
pub use error::FetchError;
pub use market::{ MarketSource, WarframeMarket };
pub use price::ArcaneInfo;
