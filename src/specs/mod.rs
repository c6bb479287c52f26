//! # Response “specs” module
//!
//! This module hosts the **endpoint-specific reading rules** for the market API.
//! Each spec focuses on a single endpoint and encodes *where the ground truth
//! lives in the JSON* and *how to extract it tolerantly*.
//!
//! ## What lives here
//! - **Pure JSON parsing** of response bodies (`/items/{id}`, `/items/{id}/orders`).
//! - **Typed records** for the fields we read (`Order`, `User`, …). Unknown fields
//!   are ignored; only the envelope path we depend on is required.
//!
//! ## What does **not** live here
//! - **Networking** – `market::WarframeMarket` fetches bodies and hands them over.
//! - **Filtering / pricing** – `price` decides which orders count.
//! - **Fallbacks** – a missing icon is reported as `None`; the image resolver
//!   decides what to show instead.
//!
//! ## Typical call chain
//! ```text
//! board::collect_section → price::aggregate → MarketSource::orders → specs::orders::parse
//!                        ↘ price::resolve_image → MarketSource::icon → specs::item::parse_icon
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured response fixtures.
pub mod item;
pub mod orders;

pub use orders::{ Order, OrderType, User, UserStatus };
