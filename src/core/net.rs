// src/core/net.rs
//
// HTTP GET through the URL-rewriting proxy (or direct when no proxy is set).

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::config::options::NetOptions;
use crate::error::FetchError;

/// Wrap `target` for the proxy: `<prefix><percent-encoded target>`.
pub fn proxied_url(proxy: Option<&str>, target: &str) -> String {
    match proxy {
        Some(prefix) => format!("{prefix}{}", urlencoding::encode(target)),
        None => target.to_string(),
    }
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    proxy: Option<String>,
}

impl HttpClient {
    pub fn new(net: &NetOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(net.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, proxy: net.proxy.clone() })
    }

    /// GET `target` (through the proxy, if any) and return the body on 2xx.
    pub async fn get_text(&self, target: &str) -> Result<String, FetchError> {
        let url = proxied_url(self.proxy.as_deref(), target);
        debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: target.to_string() });
        }
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_encodes_whole_target() {
        let url = proxied_url(
            Some("https://corsproxy.io/?"),
            "https://api.warframe.market/v1/items/magus_cloud/orders",
        );
        assert_eq!(
            url,
            "https://corsproxy.io/?https%3A%2F%2Fapi.warframe.market%2Fv1%2Fitems%2Fmagus_cloud%2Forders"
        );
    }

    #[test]
    fn no_proxy_is_passthrough() {
        let target = "https://api.warframe.market/v1/items/magus_cloud";
        assert_eq!(proxied_url(None, target), target);
    }
}
