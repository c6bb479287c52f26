//! Response spec for item metadata: `GET /items/{id}`.
//!
//! We read exactly one field: `payload.item.items_in_set[0].icon`.
//! An empty set or a missing icon comes back as `Ok(None)`.

use serde::Deserialize;

#[derive(Deserialize)]
struct Envelope {
    payload: Payload,
}

#[derive(Deserialize)]
struct Payload {
    item: Item,
}

#[derive(Deserialize)]
struct Item {
    #[serde(default)]
    items_in_set: Vec<SetItem>,
}

#[derive(Deserialize)]
struct SetItem {
    #[serde(default)]
    icon: Option<String>,
}

pub fn parse_icon(body: &str) -> Result<Option<String>, serde_json::Error> {
    let env: Envelope = serde_json::from_str(body)?;
    Ok(env
        .payload
        .item
        .items_in_set
        .into_iter()
        .next()
        .and_then(|set_item| set_item.icon)
        .filter(|icon| !icon.is_empty()))
}
