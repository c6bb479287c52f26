// src/price.rs
//
// Per-item aggregation: order book → representative price + image.
// Never fails outward; a broken item simply produces no card.

use std::path::Path;

use tracing::{ debug, warn };

use crate::{
    config::consts::{ FALLBACK_IMAGE, MAX_MOD_RANK, PLACEHOLDER_ICON_STEM, PRICE_WINDOW },
    core::sanitize::display_name,
    market::MarketSource,
    specs::{ Order, OrderType, UserStatus },
};

/// One priced arcane. `prices` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArcaneInfo {
    id: String,
    name: String,
    prices: Vec<u32>,
    avg_price: u32,
    image: String,
}

impl ArcaneInfo {
    /// `None` when there is nothing to price.
    pub fn new(id: &str, prices: Vec<u32>, image: String) -> Option<Self> {
        let platinum: Vec<f64> = prices.iter().map(|&p| f64::from(p)).collect();
        let avg_price = average(&platinum)?;
        Some(Self { id: id.to_string(), name: display_name(id), prices, avg_price, image })
    }

    /// From raw order prices. The average is taken before any rounding.
    pub fn from_platinum(id: &str, platinum: &[f64], image: String) -> Option<Self> {
        let avg_price = average(platinum)?;
        let prices = platinum.iter().map(|&p| whole(p)).collect();
        Some(Self { id: id.to_string(), name: display_name(id), prices, avg_price, image })
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    /// Ascending, at most `PRICE_WINDOW` entries.
    pub fn prices(&self) -> &[u32] { &self.prices }
    pub fn avg_price(&self) -> u32 { self.avg_price }
    pub fn image(&self) -> &str { &self.image }

    /// Cheapest qualifying price; the ranking/tiering baseline.
    pub fn top_price(&self) -> u32 {
        self.prices[0]
    }
}

fn qualifies(order: &Order) -> bool {
    order.order_type == OrderType::Sell
        && order.user.status == UserStatus::Ingame
        && order.mod_rank == Some(MAX_MOD_RANK)
}

fn whole(platinum: f64) -> u32 {
    platinum.round().max(0.0) as u32
}

/// Max-rank sell orders from in-game sellers, cheapest first, capped at the window.
/// Values are left as the API sent them.
pub fn qualifying_prices(orders: &[Order]) -> Vec<f64> {
    let mut plat: Vec<f64> = orders.iter().filter(|o| qualifies(o)).map(|o| o.platinum).collect();
    plat.sort_by(f64::total_cmp);
    plat.truncate(PRICE_WINDOW);
    plat
}

/// Rounded mean, halves up. `None` for an empty slice.
pub fn average(platinum: &[f64]) -> Option<u32> {
    if platinum.is_empty() {
        return None;
    }
    let mean = platinum.iter().sum::<f64>() / platinum.len() as f64;
    Some(whole(mean))
}

fn is_placeholder(icon: &str) -> bool {
    Path::new(icon)
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case(PLACEHOLDER_ICON_STEM))
}

/// Absolute icon URL, or the fallback for a missing/placeholder icon.
pub fn icon_url(asset_host: &str, icon: Option<&str>) -> String {
    match icon {
        Some(icon) if !icon.is_empty() && !is_placeholder(icon) => format!("{asset_host}{icon}"),
        _ => FALLBACK_IMAGE.to_string(),
    }
}

/// Image for one item. Any failure resolves to the fallback image.
pub async fn resolve_image<S: MarketSource + ?Sized>(source: &S, item_id: &str) -> String {
    match source.icon(item_id).await {
        Ok(icon) => icon_url(source.asset_host(), icon.as_deref()),
        Err(e) => {
            debug!(item = %item_id, error = %e, "icon lookup failed, using fallback");
            FALLBACK_IMAGE.to_string()
        }
    }
}

/// Price one item. `None` if the order book is unavailable or nothing qualifies.
pub async fn aggregate<S: MarketSource + ?Sized>(source: &S, item_id: &str) -> Option<ArcaneInfo> {
    let orders = match source.orders(item_id).await {
        Ok(orders) => orders,
        Err(e) => {
            warn!(item = %item_id, error = %e, "error fetching orders");
            return None;
        }
    };

    let prices = qualifying_prices(&orders);
    if prices.is_empty() {
        debug!(item = %item_id, orders = orders.len(), "no qualifying orders");
        return None;
    }

    let image = resolve_image(source, item_id).await;
    ArcaneInfo::from_platinum(item_id, &prices, image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::UserStatus::*;

    #[test]
    fn takes_four_lowest_ascending() {
        let orders: Vec<Order> = [30.0, 12.0, 20.0, 10.0, 15.0]
            .into_iter()
            .map(|p| Order::sell(Ingame, 5, p))
            .collect();
        assert_eq!(qualifying_prices(&orders), [10.0, 12.0, 15.0, 20.0]);
    }

    #[test]
    fn filters_side_status_and_rank() {
        let orders = vec![
            Order::sell(Ingame, 5, 40.0),
            Order::buy(Ingame, 5, 1.0),
            Order::sell(Online, 5, 2.0),
            Order::sell(Offline, 5, 3.0),
            Order::sell(Ingame, 4, 4.0),
            Order::sell(Ingame, 0, 5.0),
            Order { mod_rank: None, ..Order::sell(Ingame, 5, 6.0) },
            Order::sell(Ingame, 5, 35.0),
        ];
        assert_eq!(qualifying_prices(&orders), [35.0, 40.0]);
    }

    #[test]
    fn fewer_than_window_and_none() {
        let orders = vec![Order::sell(Ingame, 5, 8.0), Order::sell(Ingame, 5, 7.0)];
        assert_eq!(qualifying_prices(&orders), [7.0, 8.0]);
        assert!(qualifying_prices(&[Order::sell(Online, 5, 8.0)]).is_empty());
        assert!(qualifying_prices(&[]).is_empty());
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(average(&[10.0, 12.0, 15.0, 20.0]), Some(14)); // 14.25
        assert_eq!(average(&[1.0, 2.0]), Some(2)); // 1.5
        assert_eq!(average(&[5.0, 5.0]), Some(5));
        assert_eq!(average(&[9.0, 10.0, 10.0]), Some(10)); // 9.67
        assert_eq!(average(&[]), None);
    }

    #[test]
    fn fractional_platinum_rounds_once() {
        let orders = vec![Order::sell(Ingame, 5, 1.5), Order::sell(Ingame, 5, 1.4)];
        let plat = qualifying_prices(&orders);
        assert_eq!(plat, [1.4, 1.5]);

        let info = ArcaneInfo::from_platinum("magus_cloud", &plat, FALLBACK_IMAGE.into()).unwrap();
        assert_eq!(info.prices(), [1, 2]);
        assert_eq!(info.avg_price(), 1); // 1.45, not mean(1, 2)
    }

    #[test]
    fn arcane_info_requires_prices() {
        assert!(ArcaneInfo::new("magus_cloud", vec![], FALLBACK_IMAGE.into()).is_none());
        assert!(ArcaneInfo::from_platinum("magus_cloud", &[], FALLBACK_IMAGE.into()).is_none());

        let info = ArcaneInfo::new("magus_cloud", vec![3, 4], FALLBACK_IMAGE.into()).unwrap();
        assert_eq!(info.name(), "Magus Cloud");
        assert_eq!(info.top_price(), 3);
        assert_eq!(info.avg_price(), 4); // 3.5
    }

    #[test]
    fn icon_url_variants() {
        let host = "https://warframe.market/static/assets/";
        assert_eq!(
            icon_url(host, Some("items/images/en/magus_cloud.png")),
            "https://warframe.market/static/assets/items/images/en/magus_cloud.png"
        );
        assert_eq!(icon_url(host, None), FALLBACK_IMAGE);
        assert_eq!(icon_url(host, Some("")), FALLBACK_IMAGE);
        assert_eq!(icon_url(host, Some("unknown")), FALLBACK_IMAGE);
        assert_eq!(icon_url(host, Some("icons/en/unknown.png")), FALLBACK_IMAGE);
    }
}
