use serde::Deserialize;

use crate::{CardEffect, CardEffectType};

#[derive(Deserialize)]
#[serde(untagged)]
pub enum CardCostRepr {
    Fixed(u32),
    Symbol(String),
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "CardCostRepr")]
pub enum CardCost {
    Fixed(u32),
    /// Consumes all available energy when played.
    X,
}

impl TryFrom<CardCostRepr> for CardCost {
    type Error = anyhow::Error;

    fn try_from(value: CardCostRepr) -> Result<Self, Self::Error> {
        match value {
            CardCostRepr::Fixed(cost) => Ok(CardCost::Fixed(cost)),
            CardCostRepr::Symbol(symbol) => match symbol.trim() {
                "X" | "x" => Ok(CardCost::X),
                other => other
                    .parse::<u32>()
                    .map(CardCost::Fixed)
                    .map_err(|_| anyhow::anyhow!("invalid card cost {other:?}")),
            },
        }
    }
}

impl std::fmt::Display for CardCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCost::Fixed(cost) => write!(f, "{cost}"),
            CardCost::X => write!(f, "X"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Attack,
    Skill,
    Power,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Basic,
    Common,
    Uncommon,
    Rare,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CardUpgrade {
    #[serde(default)]
    pub cost: Option<CardCost>,
    #[serde(default)]
    pub damage: Option<u32>,
    #[serde(default)]
    pub block: Option<u32>,
    #[serde(default)]
    pub effects: Option<Vec<CardEffect>>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub cost: CardCost,
    #[serde(rename = "type")]
    pub kind: CardType,
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub damage: Option<u32>,
    #[serde(default)]
    pub block: Option<u32>,
    #[serde(default)]
    pub effects: Vec<CardEffect>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub exhaust: bool,
    #[serde(default)]
    pub upgraded: bool,
    #[serde(default)]
    pub upgrade: Option<CardUpgrade>,
}

impl Card {
    pub fn base_id(&self) -> &str {
        &self.id
    }

    pub fn has_effect(&self, predicate: impl Fn(CardEffectType) -> bool) -> bool {
        self.effects.iter().any(|e| predicate(e.kind))
    }

    pub fn can_upgrade(&self) -> bool {
        !self.upgraded && self.upgrade.is_some()
    }

    /// The upgraded form of this card, or `None` if it is already upgraded or
    /// has no upgrade defined.
    pub fn upgraded(&self) -> Option<Card> {
        if self.upgraded {
            return None;
        }
        let upgrade = self.upgrade.as_ref()?;
        let mut card = self.clone();
        card.name = format!("{}+", self.name);
        card.upgraded = true;
        card.upgrade = None;
        if let Some(cost) = upgrade.cost {
            card.cost = cost;
        }
        if let Some(damage) = upgrade.damage {
            card.damage = Some(damage);
        }
        if let Some(block) = upgrade.block {
            card.block = Some(block);
        }
        if let Some(effects) = &upgrade.effects {
            card.effects = effects.clone();
        }
        if let Some(description) = &upgrade.description {
            card.description = description.clone();
        }
        Some(card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] ({:?})", self.name, self.cost, self.kind)
    }
}
