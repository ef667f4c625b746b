use models::{CardCost, CardType};

use crate::{CardId, IdAllocator};

/// A card instance in a deck or pile. `inner` is a clone of the library
/// template (possibly upgraded); `id` is unique per instance.
#[derive(Clone, Debug)]
pub struct Card {
    pub id: CardId,
    pub inner: models::Card,
}

impl Card {
    pub fn new(id: CardId, inner: models::Card) -> Self {
        Self { id, inner }
    }

    pub fn base_id(&self) -> &str {
        self.inner.base_id()
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn kind(&self) -> CardType {
        self.inner.kind
    }

    pub fn cost(&self) -> CardCost {
        self.inner.cost
    }

    pub fn is_upgraded(&self) -> bool {
        self.inner.upgraded
    }

    pub fn is_affordable(&self, energy: u32) -> bool {
        match self.inner.cost {
            CardCost::Fixed(cost) => energy >= cost,
            CardCost::X => true,
        }
    }

    /// Replaces the template with its upgraded form, keeping the instance id.
    /// Returns `false` when there is nothing to upgrade.
    pub fn upgrade(&mut self) -> bool {
        match self.inner.upgraded() {
            Some(upgraded) => {
                self.inner = upgraded;
                true
            }
            None => false,
        }
    }

    /// A copy of this card with a fresh identity.
    pub fn duplicate(&self, ids: &mut IdAllocator) -> Card {
        Card {
            id: ids.card(),
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card<id={}, name={}>", self.id, self.inner.name)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.inner == other.inner
    }
}
