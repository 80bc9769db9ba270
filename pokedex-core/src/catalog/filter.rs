//! Pure view derivation: combined type filtering and name/id search.

use crate::api::Creature;

/// Known type tags, in the priority order used to pick a card's
/// representative type. Also the set of filter buttons the UI offers.
pub const KNOWN_TYPES: [&str; 16] = [
    "fire", "grass", "electric", "water", "ground", "rock", "fairy", "poison",
    "bug", "dragon", "psychic", "flying", "fighting", "normal", "ghost", "ice",
];

/// The active category filter: everything, or one type tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(tag) => creature.type_names().any(|name| name == tag),
        }
    }

    /// Label as shown on the filter bar.
    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(tag) => tag,
        }
    }
}

/// The derived display subset.
///
/// `All` is the sentinel meaning "render everything currently loaded,
/// directly" - it is deliberately not a materialized index list, so that
/// records arriving after derivation become visible without recomputation.
/// `Filtered` is a concrete (possibly empty) list of indices into the
/// loaded sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelection {
    All,
    Filtered(Vec<usize>),
}

impl ViewSelection {
    /// True for the "no active filter, show everything" sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ViewSelection::All)
    }
}

/// Derive the view from the loaded records, the active type filter and the
/// current search text.
///
/// No side effects, no sorting: the relative order of `loaded` is
/// preserved. A non-empty search matches when the lowercased display name
/// contains the lowercased text, or when the decimal id contains it.
pub fn derive_view(loaded: &[Creature], active: &TypeFilter, search: &str) -> ViewSelection {
    if search.is_empty() && *active == TypeFilter::All {
        return ViewSelection::All;
    }

    let base = loaded
        .iter()
        .enumerate()
        .filter(|(_, creature)| active.matches(creature));

    if search.is_empty() {
        return ViewSelection::Filtered(base.map(|(index, _)| index).collect());
    }

    let term = search.to_lowercase();
    let indices = base
        .filter(|(_, creature)| {
            creature.name.to_lowercase().contains(&term)
                || creature.id.to_string().contains(&term)
        })
        .map(|(index, _)| index)
        .collect();

    ViewSelection::Filtered(indices)
}
