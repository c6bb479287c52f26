// src/board.rs
//
// The price board: one section per syndicate, cards sorted and tiered.
//
// - build_section: pure shaping of aggregation results (discard / sort / tier).
// - collect_section: fan out `price::aggregate` over a group and join.
// - collect_board: walk the catalog one group at a time.
// - SectionState: expanded/collapsed toggle per rendered section.

use std::fmt;

use futures::future::join_all;
use tracing::info;

use crate::{
    config::{ Catalog, consts::{ CURRENCY_SUFFIX, MID_TIER_RATIO } },
    market::MarketSource,
    price::{ self, ArcaneInfo },
    progress::Progress,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Mid,
    Low,
}

impl Tier {
    /// `High` for the group maximum, `Mid` from 75% of it, `Low` below.
    pub fn classify(top_price: u32, group_max: u32) -> Tier {
        if top_price == group_max {
            Tier::High
        } else if f64::from(top_price) >= f64::from(group_max) * MID_TIER_RATIO {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Mid => "mid",
            Tier::Low => "low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tier::High => "price-high",
            Tier::Mid => "price-mid",
            Tier::Low => "price-low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceCard {
    pub info: ArcaneInfo,
    pub tier: Tier,
}

impl PriceCard {
    /// `10p, 12p, 15p, 20p`
    pub fn prices_label(&self) -> String {
        self.info
            .prices()
            .iter()
            .map(|p| format!("{p}{CURRENCY_SUFFIX}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn avg_label(&self) -> String {
        format!("{}{CURRENCY_SUFFIX}", self.info.avg_price())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyndicateSection {
    pub name: String,
    /// Descending by top price. May be empty; the section is still shown.
    pub cards: Vec<PriceCard>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceBoard {
    pub sections: Vec<SyndicateSection>,
}

impl PriceBoard {
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

/// Expanded/collapsed state of one rendered section. Starts expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionState {
    #[default]
    Expanded,
    Collapsed,
}

impl SectionState {
    pub fn toggle(&mut self) {
        *self = match self {
            SectionState::Expanded => SectionState::Collapsed,
            SectionState::Collapsed => SectionState::Expanded,
        };
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, SectionState::Expanded)
    }

    /// Heading arrow.
    pub fn arrow(&self) -> &'static str {
        match self {
            SectionState::Expanded => "▼",
            SectionState::Collapsed => "▶",
        }
    }
}

/// Shape one group's aggregation results (in catalog order) into a section.
pub fn build_section(name: &str, results: Vec<Option<ArcaneInfo>>) -> SyndicateSection {
    let mut infos: Vec<ArcaneInfo> = results.into_iter().flatten().collect();

    let Some(max) = infos.iter().map(ArcaneInfo::top_price).max() else {
        return SyndicateSection { name: name.to_string(), cards: Vec::new() };
    };

    // stable: equal top prices keep catalog order
    infos.sort_by(|a, b| b.top_price().cmp(&a.top_price()));

    let cards = infos
        .into_iter()
        .map(|info| {
            let tier = Tier::classify(info.top_price(), max);
            PriceCard { info, tier }
        })
        .collect();

    SyndicateSection { name: name.to_string(), cards }
}

/// Price every item of one group concurrently, then shape the section.
pub async fn collect_section<S, I>(source: &S, name: &str, items: &[I]) -> SyndicateSection
where
    S: MarketSource + ?Sized,
    I: AsRef<str>,
{
    let results = join_all(items.iter().map(|id| price::aggregate(source, id.as_ref()))).await;
    build_section(name, results)
}

/// One render pass over the whole catalog. Groups run one after another.
pub async fn collect_board<S: MarketSource + ?Sized>(
    source: &S,
    catalog: &Catalog,
    mut progress: Option<&mut dyn Progress>,
) -> PriceBoard {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(catalog.groups().len());
        p.log("Loading prices...");
    }

    let mut sections = Vec::with_capacity(catalog.groups().len());
    for group in catalog.groups() {
        let section = collect_section(source, &group.name, &group.items).await;
        info!(
            syndicate = %group.name,
            priced = section.cards.len(),
            items = group.items.len(),
            "section ready"
        );
        if let Some(p) = progress.as_deref_mut() {
            p.group_done(&group.name, section.cards.len(), group.items.len());
        }
        sections.push(section);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    PriceBoard { sections }
}

impl fmt::Display for PriceBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "== {} ==", section.name)?;
            if section.cards.is_empty() {
                writeln!(f, "  (no prices)")?;
            }
            for card in &section.cards {
                writeln!(
                    f,
                    "  {:<6} {:<24} {:<24} Avg: {}",
                    format!("[{}]", card.tier.label()),
                    card.info.name(),
                    card.prices_label(),
                    card.avg_label(),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &str, prices: &[u32]) -> Option<ArcaneInfo> {
        ArcaneInfo::new(id, prices.to_vec(), "images/fallback.png".into())
    }

    fn ids(section: &SyndicateSection) -> Vec<&str> {
        section.cards.iter().map(|c| c.info.id()).collect()
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(Tier::classify(100, 100), Tier::High);
        assert_eq!(Tier::classify(75, 100), Tier::Mid);
        assert_eq!(Tier::classify(74, 100), Tier::Low);
        assert_eq!(Tier::classify(5, 10), Tier::Low);
        assert_eq!(Tier::classify(8, 10), Tier::Mid);
    }

    #[test]
    fn sorts_descending_and_drops_absent() {
        let section = build_section("The Quills", vec![
            info("magus_cloud", &[4, 5]),
            None,
            info("magus_nourish", &[20, 21, 22, 30]),
            info("magus_cadence", &[16]),
        ]);
        assert_eq!(ids(&section), ["magus_nourish", "magus_cadence", "magus_cloud"]);
        let tiers: Vec<Tier> = section.cards.iter().map(|c| c.tier).collect();
        assert_eq!(tiers, [Tier::High, Tier::Mid, Tier::Low]);
    }

    #[test]
    fn ties_keep_catalog_order_and_share_high() {
        let section = build_section("Cavia", vec![
            info("melee_vortex", &[9]),
            info("melee_exposure", &[12, 13]),
            info("melee_influence", &[12]),
            info("melee_animosity", &[9, 40]),
        ]);
        assert_eq!(ids(&section), ["melee_exposure", "melee_influence", "melee_vortex", "melee_animosity"]);
        assert_eq!(section.cards[0].tier, Tier::High);
        assert_eq!(section.cards[1].tier, Tier::High);
        assert_eq!(section.cards[2].tier, Tier::Mid); // 9 >= 0.75 * 12
    }

    #[test]
    fn empty_group_is_still_a_section() {
        let section = build_section("The Hex", vec![None, None]);
        assert_eq!(section.name, "The Hex");
        assert!(section.cards.is_empty());
    }

    #[test]
    fn card_labels_use_currency_suffix() {
        let section = build_section("Cephalon Simaris", vec![info("energy_conversion", &[10, 12, 15, 20])]);
        let card = &section.cards[0];
        assert_eq!(card.prices_label(), "10p, 12p, 15p, 20p");
        assert_eq!(card.avg_label(), "14p");
    }

    #[test]
    fn section_state_toggles() {
        let mut state = SectionState::default();
        assert!(state.is_expanded());
        state.toggle();
        assert_eq!(state, SectionState::Collapsed);
        assert_eq!(state.arrow(), "▶");
        state.toggle();
        assert!(state.is_expanded());
    }

    #[test]
    fn text_rendering_lists_every_section() {
        let board = PriceBoard {
            sections: vec![
                build_section("Cephalon Simaris", vec![info("energy_conversion", &[10, 12])]),
                build_section("The Hex", vec![None]),
            ],
        };
        let text = board.to_string();
        assert!(text.contains("== Cephalon Simaris =="));
        assert!(text.contains("[high]"));
        assert!(text.contains("Energy Conversion"));
        assert!(text.contains("10p, 12p"));
        assert!(text.contains("Avg: 11p"));
        assert!(text.contains("== The Hex ==\n  (no prices)"));
    }
}
