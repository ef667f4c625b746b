use models::Percentage;

use crate::SimulationResult;

#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub total_runs: usize,
    pub victories: usize,
    pub defeats: usize,
    pub timeouts: usize,
    pub win_rate: Percentage,
    pub average_turns: f32,
    pub average_player_health: f32,
    pub average_enemy_health: f32,
    pub average_gold: f32,
}

impl From<&Vec<SimulationResult>> for SimulationSummary {
    fn from(results: &Vec<SimulationResult>) -> Self {
        let total_runs = results.len();
        let mut victories = 0;
        let mut defeats = 0;
        let mut timeouts = 0;
        let mut sum_turns = 0f64;
        let mut sum_player_health = 0f64;
        let mut sum_enemy_health = 0f64;
        let mut sum_gold = 0f64;

        for res in results.iter() {
            match res {
                SimulationResult::Victory(..) => victories += 1,
                SimulationResult::Defeat(..) => defeats += 1,
                SimulationResult::Timeout(..) => timeouts += 1,
            }
            let inner = res.inner_ref();
            sum_turns += inner.turns as f64;
            sum_player_health += inner.player.combatant.health.current() as f64;
            sum_enemy_health += inner
                .enemies
                .iter()
                .map(|e| e.combatant.health.current() as f64)
                .sum::<f64>();
            sum_gold += inner.reward.as_ref().map(|r| r.gold as f64).unwrap_or(0.0);
        }

        let average = |sum: f64| {
            if total_runs > 0 {
                (sum / total_runs as f64) as f32
            } else {
                0.0
            }
        };

        SimulationSummary {
            total_runs,
            victories,
            defeats,
            timeouts,
            win_rate: Percentage::from_ratio(victories as u64, total_runs as u64),
            average_turns: average(sum_turns),
            average_player_health: average(sum_player_health),
            average_enemy_health: average(sum_enemy_health),
            average_gold: average(sum_gold),
        }
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} runs: {} victories, {} defeats, {} timeouts ({} win rate)",
            self.total_runs, self.victories, self.defeats, self.timeouts, self.win_rate
        )?;
        writeln!(f, "  average turns:         {:.2}", self.average_turns)?;
        writeln!(f, "  average player health: {:.2}", self.average_player_health)?;
        writeln!(f, "  average enemy health:  {:.2}", self.average_enemy_health)?;
        write!(f, "  average gold:          {:.2}", self.average_gold)
    }
}
