//! Response spec for the order book: `GET /items/{id}/orders`.
//!
//! Envelope: `{ "payload": { "orders": [ { order_type, platinum, mod_rank, user: { status } }, … ] } }`.
//! Everything else on an order (ids, quantities, timestamps, user names) is ignored.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Ingame,
    Online,
    Offline,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub status: UserStatus,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    pub order_type: OrderType,
    pub user: User,
    /// Absent for items without ranks.
    #[serde(default)]
    pub mod_rank: Option<u8>,
    pub platinum: f64,
}

impl Order {
    pub fn sell(status: UserStatus, mod_rank: u8, platinum: f64) -> Self {
        Self { order_type: OrderType::Sell, user: User { status }, mod_rank: Some(mod_rank), platinum }
    }

    pub fn buy(status: UserStatus, mod_rank: u8, platinum: f64) -> Self {
        Self { order_type: OrderType::Buy, ..Self::sell(status, mod_rank, platinum) }
    }
}

#[derive(Deserialize)]
struct Envelope {
    payload: Payload,
}

#[derive(Deserialize)]
struct Payload {
    orders: Vec<Order>,
}

pub fn parse(body: &str) -> Result<Vec<Order>, serde_json::Error> {
    let env: Envelope = serde_json::from_str(body)?;
    Ok(env.payload.orders)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "payload": {
            "orders": [
                {
                    "platinum": 14, "quantity": 2, "order_type": "sell", "mod_rank": 5,
                    "visible": true, "id": "a1",
                    "user": { "ingame_name": "Tenno1", "status": "ingame", "reputation": 12 }
                },
                {
                    "platinum": 9, "quantity": 1, "order_type": "buy", "mod_rank": 0,
                    "user": { "ingame_name": "Tenno2", "status": "offline" }
                },
                {
                    "platinum": 11.0, "order_type": "sell",
                    "user": { "ingame_name": "Tenno3", "status": "invisible" }
                }
            ]
        }
    }"#;

    #[test]
    fn parses_orders_and_ignores_extra_fields() {
        let orders = parse(SAMPLE).unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0], Order::sell(UserStatus::Ingame, 5, 14.0));
        assert_eq!(orders[1], Order::buy(UserStatus::Offline, 0, 9.0));
    }

    #[test]
    fn tolerates_missing_rank_and_unknown_status() {
        let orders = parse(SAMPLE).unwrap();
        assert_eq!(orders[2].mod_rank, None);
        assert_eq!(orders[2].user.status, UserStatus::Unknown);
        assert_eq!(orders[2].platinum, 11.0);
    }

    #[test]
    fn wrong_envelope_is_an_error() {
        assert!(parse(r#"{"error": "not found"}"#).is_err());
        assert!(parse("<html>rate limited</html>").is_err());
    }
}
