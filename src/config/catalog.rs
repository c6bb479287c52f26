// src/config/catalog.rs
//! Built-in syndicate → arcane catalog.
//!
//! Group order and item order are significant: sections render in catalog
//! order and equal-priced cards keep their catalog position.

static SYNDICATE_ARCANES: &[(&str, &[&str])] = &[
    ("The Quills", &[
        "magus_cloud", "magus_replenish", "magus_nourish", "magus_cadence", "magus_elevate",
    ]),
    ("Cavia", &[
        "melee_retaliation", "melee_fortification", "melee_exposure", "melee_influence",
        "melee_animosity", "melee_vortex",
    ]),
    ("The Holdfasts", &[
        "eternal_eradicate", "eternal_onslaught", "cascadia_flare", "cascadia_empowered",
        "cascadia_overcharge", "molt_vigor", "molt_efficiency", "molt_augmented", "molt_reconstruct",
    ]),
    ("The Hex", &[
        "primary_crux", "arcane_camisado", "arcane_impetus", "arcane_truculence",
        "arcane_bellicose", "secondary_enervate", "arcane_crepuscular",
    ]),
    ("Cephalon Simaris", &[
        "energy_conversion", "health_conversion",
    ]),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyndicateGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<SyndicateGroup>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_pairs(SYNDICATE_ARCANES.iter().map(|(name, items)| (*name, items.iter().copied())))
    }

    /// Build a catalog from `(syndicate, items)` pairs, keeping the given order.
    pub fn from_pairs<N, I, S>(pairs: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = pairs
            .into_iter()
            .map(|(name, items)| SyndicateGroup {
                name: name.into(),
                items: items.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[SyndicateGroup] {
        &self.groups
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn get(&self, syndicate: &str) -> Option<&SyndicateGroup> {
        self.groups.iter().find(|g| g.name.eq_ignore_ascii_case(syndicate))
    }

    /// Restrict to the named syndicates (case-insensitive), keeping catalog order.
    /// Returns the first unknown name as the error.
    pub fn only<S: AsRef<str>>(&self, names: &[S]) -> Result<Catalog, String> {
        if let Some(unknown) = names.iter().find(|n| self.get(n.as_ref()).is_none()) {
            return Err(unknown.as_ref().to_string());
        }
        let groups = self
            .groups
            .iter()
            .filter(|g| names.iter().any(|n| g.name.eq_ignore_ascii_case(n.as_ref())))
            .cloned()
            .collect();
        Ok(Catalog { groups })
    }
}
