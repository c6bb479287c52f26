// src/market.rs
//
// Seam between pricing and the remote API. Pricing only sees `MarketSource`;
// the live implementation fetches bodies via core::net and reads them via specs.

use async_trait::async_trait;

use crate::{
    config::options::NetOptions,
    core::HttpClient,
    error::FetchError,
    specs::{ self, Order },
};

#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Full order book for one item.
    async fn orders(&self, item_id: &str) -> Result<Vec<Order>, FetchError>;

    /// Raw icon path for one item, as published by the API (`None` if absent).
    async fn icon(&self, item_id: &str) -> Result<Option<String>, FetchError>;

    /// Host that icon paths are relative to.
    fn asset_host(&self) -> &str;
}

/// warframe.market v1, reached through the configured proxy.
pub struct WarframeMarket {
    http: HttpClient,
    api_base: String,
    asset_host: String,
}

impl WarframeMarket {
    pub fn new(net: &NetOptions) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new(net)?,
            api_base: net.api_base.clone(),
            asset_host: net.asset_host.clone(),
        })
    }

    fn item_url(&self, item_id: &str) -> String {
        format!("{}{}", self.api_base, item_id)
    }
}

#[async_trait]
impl MarketSource for WarframeMarket {
    async fn orders(&self, item_id: &str) -> Result<Vec<Order>, FetchError> {
        let url = format!("{}/orders", self.item_url(item_id));
        let body = self.http.get_text(&url).await?;
        Ok(specs::orders::parse(&body)?)
    }

    async fn icon(&self, item_id: &str) -> Result<Option<String>, FetchError> {
        let body = self.http.get_text(&self.item_url(item_id)).await?;
        Ok(specs::item::parse_icon(&body)?)
    }

    fn asset_host(&self) -> &str {
        &self.asset_host
    }
}
