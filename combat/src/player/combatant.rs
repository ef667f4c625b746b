use models::{StatusEffect, StatusEffectType};

use super::Health;

/// The shape shared by the player and every enemy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Combatant {
    pub health: Health,
    pub block: u32,
    pub statuses: Vec<StatusEffect>,
}

impl Combatant {
    pub fn new(max_health: u64) -> Self {
        Self {
            health: Health::full(max_health),
            block: 0,
            statuses: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn status(&self, kind: StatusEffectType) -> Option<&StatusEffect> {
        self.statuses.iter().find(|s| s.kind == kind)
    }

    pub fn stacks(&self, kind: StatusEffectType) -> u32 {
        self.status(kind).map(|s| s.stacks).unwrap_or(0)
    }

    pub fn has_status(&self, kind: StatusEffectType) -> bool {
        self.status(kind).is_some()
    }

    pub fn gain_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Heals up to max health and returns how much was restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health.current();
        self.health += amount as i64;
        (self.health.current() - before) as u32
    }

    /// Health loss that bypasses block. Returns the amount actually lost.
    pub fn lose_health(&mut self, amount: u32) -> u32 {
        let before = self.health.current();
        self.health -= amount as i64;
        (before - self.health.current()) as u32
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statuses = self
            .statuses
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(
            f,
            "❤️ {}/{}, 🛡️:{} [{statuses}]",
            self.health.current(),
            self.health.max(),
            self.block,
        )
    }
}
