// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://api.warframe.market/v1/items/";
pub const PROXY_PREFIX: &str = "https://corsproxy.io/?";
pub const ASSET_HOST: &str = "https://warframe.market/static/assets/";
pub const USER_AGENT: &str = concat!("arcane_prices/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Images
pub const FALLBACK_IMAGE: &str = "images/fallback.png";
pub const PLACEHOLDER_ICON_STEM: &str = "unknown";

// Pricing
pub const MAX_MOD_RANK: u8 = 5;
pub const PRICE_WINDOW: usize = 4;
pub const MID_TIER_RATIO: f64 = 0.75;
pub const CURRENCY_SUFFIX: &str = "p";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "prices";

// GUI
pub const AUTO_REFRESH_SECS: u64 = 300; // 5 minutes
pub const ICON_SIZE: f32 = 64.0;
pub const CARD_WIDTH: f32 = 180.0;
