use serde::Deserialize;

use crate::{CardEffect, CardType};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    CombatStart,
    TurnStart,
    TurnEnd,
    CardPlayed,
    DamageTaken,
    CombatEnd,
    /// Flat bonus added to the first attack of a combat. Queried by the damage
    /// pipeline rather than dispatched.
    FirstAttack,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trigger::{self:?}")
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PassiveEffect {
    pub trigger: Trigger,
    /// Restricts `CardPlayed` reactions to cards of this type.
    #[serde(default)]
    pub card_type: Option<CardType>,
    #[serde(flatten)]
    pub effect: CardEffect,
}

impl PassiveEffect {
    pub fn new(trigger: Trigger, effect: CardEffect) -> Self {
        Self {
            trigger,
            card_type: None,
            effect,
        }
    }

    pub fn matches(&self, trigger: Trigger, card_type: Option<CardType>) -> bool {
        if self.trigger != trigger {
            return false;
        }
        match (self.card_type, card_type) {
            (Some(required), Some(played)) => required == played,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}
