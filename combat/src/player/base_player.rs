use models::{PowerCard, Relic};

use crate::ENERGY_CAP_BONUS;

use super::Combatant;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Player {
    pub combatant: Combatant,
    pub energy: u32,
    pub max_energy: u32,
    pub gold: u32,
    pub relics: Vec<Relic>,
    pub power_cards: Vec<PowerCard>,
}

impl Player {
    pub fn new(max_health: u64, max_energy: u32) -> Self {
        Self {
            combatant: Combatant::new(max_health),
            energy: max_energy,
            max_energy,
            gold: 0,
            relics: Vec::new(),
            power_cards: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    pub fn has_relic(&self, id: &str) -> bool {
        self.relics.iter().any(|r| r.id == id)
    }

    /// Adds energy, allowing at most `ENERGY_CAP_BONUS` above the maximum.
    pub fn gain_energy(&mut self, amount: u32) {
        let cap = self.max_energy + *ENERGY_CAP_BONUS;
        self.energy = self.energy.saturating_add(amount).min(cap).max(self.energy);
    }

    pub fn restore_energy(&mut self) {
        self.energy = self.max_energy;
    }

    /// Drops everything that only lives for one combat: block, energy spent,
    /// attached power cards and status effects.
    pub fn reset_combat_state(&mut self) {
        self.combatant.block = 0;
        self.combatant.statuses.clear();
        self.power_cards.clear();
        self.restore_energy();
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let relics = self
            .relics
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        write!(
            f,
            "Player({}, ⚡:{}/{}, 💰:{}) [{relics}]",
            self.combatant, self.energy, self.max_energy, self.gold,
        )
    }
}
