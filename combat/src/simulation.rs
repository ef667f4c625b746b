use rand::Rng;

use crate::{
    Card, CombatController, CombatOutcome, CombatRng, CombatSession, CombatTemplate,
    EnemyId, MAX_AUTOPLAY_TURNS, MAX_PLAYS_PER_TURN, RunState, SeededRng, SimulationResult,
    SimulationResultInner, TurnPhase,
};

/// A combat that plays itself with a simple greedy policy.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub run: RunState,
    pub roster: Vec<models::EnemyTemplate>,
    pub elite: bool,
    pub seed: Option<u64>,
    pub source: Option<String>,
}

impl TryFrom<CombatTemplate> for Simulation {
    type Error = anyhow::Error;

    fn try_from(template: CombatTemplate) -> Result<Self, Self::Error> {
        let run = RunState::try_from(&template.player)
            .map_err(|error| anyhow::anyhow!("unable to parse player template: {error}"))?;
        if template.encounter.enemies.is_empty() {
            anyhow::bail!("encounter without enemies")
        }
        let roster = template.encounter.roster()?;
        Ok(Self {
            run,
            roster,
            elite: template.encounter.elite,
            seed: template.seed,
            source: template.source,
        })
    }
}

/// First affordable card in hand. X-cost cards are skipped with no energy
/// left so they are not thrown away for nothing.
pub fn choose_card(session: &CombatSession) -> Option<&Card> {
    session.hand.iter().find(|card| match card.cost() {
        models::CardCost::X => session.player.energy > 0,
        models::CardCost::Fixed(_) => card.is_affordable(session.player.energy),
    })
}

/// The living enemy with the least health.
pub fn choose_target(session: &CombatSession) -> Option<EnemyId> {
    session
        .living_enemies()
        .min_by_key(|e| e.combatant.health.current())
        .map(|e| e.id)
}

impl Simulation {
    pub fn create_rng() -> SeededRng {
        SeededRng::from_entropy()
    }

    fn play_turn<R: CombatRng>(controller: &mut CombatController<R>) {
        for _ in 0..*MAX_PLAYS_PER_TURN {
            let session = controller.session();
            if session.is_over() || session.current_turn != TurnPhase::PlayerTurn {
                return;
            }
            let Some(card_id) = choose_card(session).map(|c| c.id) else {
                break;
            };
            let target = choose_target(session);
            controller.play_card(card_id, target);
            if controller.session().hand_card(card_id).is_some() {
                tracing::warn!(card = %card_id, "card could not be played");
                break;
            }
        }
        controller.end_turn();
    }

    #[tracing::instrument(skip_all, fields(source = ?self.source))]
    pub fn run_once_with_rng<R: CombatRng>(&self, rng: R) -> SimulationResult {
        let mut controller = CombatController::start(
            self.run.player.clone(),
            self.run.deck.clone(),
            &self.roster,
            self.elite,
            self.run.ids.clone(),
            rng,
        );
        while !controller.session().is_over() && controller.session().turn <= *MAX_AUTOPLAY_TURNS
        {
            Self::play_turn(&mut controller);
        }

        let events = controller.take_events();
        let session = controller.into_session();
        let outcome = session.outcome.clone();
        let inner = SimulationResultInner {
            events,
            turns: session.turn,
            player: session.player,
            enemies: session.enemies.into_values().collect(),
            reward: match &outcome {
                Some(CombatOutcome::Victory(reward)) => Some(reward.clone()),
                _ => None,
            },
            source: self.source.clone(),
        };
        match outcome {
            Some(CombatOutcome::Victory(..)) => SimulationResult::Victory(inner),
            Some(CombatOutcome::Defeat) => SimulationResult::Defeat(inner),
            None => {
                tracing::warn!(turns = inner.turns, "combat did not finish");
                SimulationResult::Timeout(inner)
            }
        }
    }

    pub fn run_once(&self) -> SimulationResult {
        let rng = match self.seed {
            Some(seed) => SeededRng::seed_from_u64(seed),
            None => Self::create_rng(),
        };
        self.run_once_with_rng(rng)
    }

    pub fn run(&self, iterations: usize) -> Vec<SimulationResult> {
        self.run_with_rng(iterations, Self::create_rng())
    }

    /// Each iteration gets its own rng seeded from `rng`.
    pub fn run_with_rng(&self, iterations: usize, mut rng: SeededRng) -> Vec<SimulationResult> {
        (0..iterations)
            .map(|_| {
                let seed = rng.0.random::<u64>();
                self.run_once_with_rng(SeededRng::seed_from_u64(seed))
            })
            .collect()
    }
}
