use crate::{CombatEvent, CombatReward, Enemy, Player, TaggedCombatEvent};

#[derive(Clone, Debug)]
pub struct SimulationResultInner {
    pub events: Vec<TaggedCombatEvent>,
    pub turns: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub reward: Option<CombatReward>,
    pub source: Option<String>,
}

#[derive(Clone, Debug)]
pub enum SimulationResult {
    Victory(SimulationResultInner),
    Defeat(SimulationResultInner),
    Timeout(SimulationResultInner),
}

impl SimulationResult {
    pub fn inner_ref(&self) -> &SimulationResultInner {
        match self {
            SimulationResult::Victory(r)
            | SimulationResult::Defeat(r)
            | SimulationResult::Timeout(r) => r,
        }
    }

    pub fn short_str(&self) -> String {
        match self {
            SimulationResult::Victory(..) => "Victory".to_string(),
            SimulationResult::Defeat(..) => "Defeat".to_string(),
            SimulationResult::Timeout(..) => "Timeout".to_string(),
        }
    }
}

impl std::fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner_ref();
        let mut res = format!("[turn {}] {}\n", inner.turns, self.short_str());
        for event in &inner.events {
            match &event.1 {
                CombatEvent::TurnStarted(n) => res.push_str(&format!("Turn {n}\n")),
                e => res.push_str(&format!("  {e:?} <- {}\n", event.0)),
            }
        }
        res.push_str(&format!("{}\n", inner.player));
        for enemy in &inner.enemies {
            res.push_str(&format!("{enemy}\n"));
        }
        if let Some(reward) = &inner.reward {
            res.push_str(&format!("Reward: {reward}\n"));
        }
        write!(f, "{res}")
    }
}
