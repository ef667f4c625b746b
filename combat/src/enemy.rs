use models::{EnemyIntent, EnemyMove, EnemyTemplate};

use crate::{Combatant, ELITE_HEALTH_MULTIPLIER, EnemyId};

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: String,
    pub name: String,
    pub combatant: Combatant,
    pub moves: Vec<EnemyMove>,
    pub next_move: Option<EnemyMove>,
}

impl Enemy {
    /// Instantiates a template. Elites get their health scaled (floored).
    /// The first intent is rolled by the caller.
    pub fn from_template(id: EnemyId, template: &EnemyTemplate, elite: bool) -> Self {
        let health = if elite {
            (template.health as f64 * *ELITE_HEALTH_MULTIPLIER).floor() as u64
        } else {
            template.health as u64
        };
        Self {
            id,
            kind: template.id.clone(),
            name: template.name.clone(),
            combatant: Combatant::new(health),
            moves: template.moves.clone(),
            next_move: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    pub fn intent(&self) -> Option<EnemyIntent> {
        self.next_move.as_ref().map(EnemyMove::intent)
    }
}

impl std::fmt::Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.intent() {
            Some(intent) => write!(f, "{}<{}> {} -> {intent}", self.name, self.id, self.combatant),
            None => write!(f, "{}<{}> {}", self.name, self.id, self.combatant),
        }
    }
}
