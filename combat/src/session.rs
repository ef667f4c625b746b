use indexmap::IndexMap;
use models::{EnemyTemplate, Trigger};

use crate::{
    Card, CardId, CombatEvent, CombatReward, CombatRng, CombatSide, Enemy, EnemyId, HAND_SIZE,
    IdAllocator, Player, TaggedCombatEvent, TriggerContext, TriggerOutcome, declare_intent,
    draw, end_turn, generate_reward, play_card, process_effects, process_enemy_turn,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    #[default]
    PlayerTurn,
    EnemyTurn,
    CombatEnd,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CombatOutcome {
    Victory(CombatReward),
    Defeat,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    PlayCard {
        card_id: CardId,
        target: Option<EnemyId>,
    },
    EndTurn,
    ProcessEnemyTurn,
    DrawCards(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatSession {
    pub player: Player,
    pub enemies: IndexMap<EnemyId, Enemy>,
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub exhaust_pile: Vec<Card>,
    pub current_turn: TurnPhase,
    pub first_attack_this_combat: bool,
    pub turn: u32,
    pub elite: bool,
    pub ids: IdAllocator,
    pub outcome: Option<CombatOutcome>,
}

impl CombatSession {
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn hand_card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card_id)
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values().filter(|e| e.is_alive())
    }

    /// Every card the session owns, across all piles.
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len() + self.exhaust_pile.len()
    }

    /// Sum of relic `FirstAttack` damage while the bonus is still available.
    pub fn first_attack_bonus(&self) -> u32 {
        if !self.first_attack_this_combat {
            return 0;
        }
        self.player
            .relics
            .iter()
            .flat_map(|r| r.effects_for(Trigger::FirstAttack))
            .filter(|e| e.effect.kind == models::CardEffectType::Damage)
            .map(|e| e.effect.value)
            .sum()
    }
}

/// Result of reducing one command. `deferred` commands must be reduced in
/// order after this one has been committed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub session: CombatSession,
    pub deferred: Vec<Command>,
    pub events: Vec<TaggedCombatEvent>,
}

impl Transition {
    pub fn unchanged(session: CombatSession) -> Self {
        Self {
            session,
            deferred: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Scratch space for deferred commands and events while a command resolves.
#[derive(Debug, Default)]
pub struct Journal {
    pub deferred: Vec<Command>,
    pub events: Vec<TaggedCombatEvent>,
}

impl Journal {
    pub fn push(&mut self, side: CombatSide, event: CombatEvent) {
        tracing::debug!(%side, ?event);
        self.events.push(TaggedCombatEvent(side, event));
    }

    pub fn absorb(&mut self, outcome: TriggerOutcome) {
        self.deferred.extend(outcome.deferred);
        self.events.extend(outcome.events);
    }

    pub fn into_transition(self, session: CombatSession) -> Transition {
        Transition {
            session,
            deferred: self.deferred,
            events: self.events,
        }
    }
}

#[tracing::instrument(skip_all, fields(command = ?command))]
pub fn reduce<R: CombatRng>(session: CombatSession, command: Command, rng: &mut R) -> Transition {
    match command {
        Command::PlayCard { card_id, target } => play_card(session, card_id, target, rng),
        Command::EndTurn => end_turn(session, rng),
        Command::ProcessEnemyTurn => process_enemy_turn(session, rng),
        Command::DrawCards(count) => {
            if session.is_over() {
                return Transition::unchanged(session);
            }
            let mut session = session;
            let mut journal = Journal::default();
            draw(&mut session, count, rng, &mut journal);
            journal.into_transition(session)
        }
    }
}

/// Sets up a fresh session: combat-scoped player state is reset, the deck is
/// shuffled into the draw pile, enemies roll their first intents, relics fire
/// `CombatStart` then `TurnStart`, and the opening hand is drawn.
#[tracing::instrument(skip_all, fields(enemies = roster.len(), elite = elite))]
pub fn start_combat<R: CombatRng>(
    mut player: Player,
    mut deck: Vec<Card>,
    roster: &[EnemyTemplate],
    elite: bool,
    mut ids: IdAllocator,
    rng: &mut R,
) -> Transition {
    let mut journal = Journal::default();
    player.reset_combat_state();
    rng.shuffle(&mut deck);

    let mut enemies = IndexMap::new();
    for template in roster {
        let mut enemy = Enemy::from_template(ids.enemy(), template, elite);
        declare_intent(&mut enemy, rng, &mut journal);
        enemies.insert(enemy.id, enemy);
    }

    let mut session = CombatSession {
        player,
        enemies,
        draw_pile: deck,
        current_turn: TurnPhase::PlayerTurn,
        first_attack_this_combat: true,
        turn: 1,
        elite,
        ids,
        ..Default::default()
    };
    journal.push(CombatSide::Player, CombatEvent::CombatStarted);

    if session.enemies.is_empty() {
        finish_victory(&mut session, rng, &mut journal);
        return journal.into_transition(session);
    }

    let context = TriggerContext::default();
    for trigger in [Trigger::CombatStart, Trigger::TurnStart] {
        let outcome = process_effects(trigger, &mut session.player, &mut session.enemies, &context);
        journal.absorb(outcome);
    }
    journal.push(CombatSide::Player, CombatEvent::TurnStarted(session.turn));
    draw(&mut session, *HAND_SIZE, rng, &mut journal);
    settle(&mut session, rng, &mut journal);
    journal.into_transition(session)
}

/// Drops dead enemies from the session.
pub fn remove_dead_enemies(session: &mut CombatSession, journal: &mut Journal) {
    let dead: Vec<EnemyId> = session
        .enemies
        .values()
        .filter(|e| !e.is_alive())
        .map(|e| e.id)
        .collect();
    for id in dead {
        session.enemies.shift_remove(&id);
        journal.push(CombatSide::Enemy(id), CombatEvent::EnemyDefeated);
    }
}

/// Removes the dead and ends the combat if either side has been wiped out.
/// Returns `true` when the combat is over.
pub fn settle<R: CombatRng>(
    session: &mut CombatSession,
    rng: &mut R,
    journal: &mut Journal,
) -> bool {
    if session.is_over() {
        return true;
    }
    if !session.player.is_alive() {
        finish_defeat(session, journal);
        return true;
    }
    remove_dead_enemies(session, journal);
    if session.enemies.is_empty() {
        finish_victory(session, rng, journal);
        return true;
    }
    false
}

pub fn finish_defeat(session: &mut CombatSession, journal: &mut Journal) {
    tracing::info!(turn = session.turn, "combat lost");
    session.current_turn = TurnPhase::CombatEnd;
    session.outcome = Some(CombatOutcome::Defeat);
    journal.push(CombatSide::Player, CombatEvent::Defeat);
}

/// Fires `CombatEnd`, clears combat-scoped player state and rolls the reward.
pub fn finish_victory<R: CombatRng>(
    session: &mut CombatSession,
    rng: &mut R,
    journal: &mut Journal,
) {
    let outcome = process_effects(
        Trigger::CombatEnd,
        &mut session.player,
        &mut session.enemies,
        &TriggerContext::default(),
    );
    // Draws requested by CombatEnd effects have nowhere to go.
    journal.events.extend(outcome.events);

    session.player.combatant.statuses.clear();
    session.player.combatant.block = 0;
    session.player.power_cards.clear();

    let reward = generate_reward(&session.player, session.elite, rng);
    tracing::info!(turn = session.turn, gold = reward.gold, "combat won");
    session.current_turn = TurnPhase::CombatEnd;
    session.outcome = Some(CombatOutcome::Victory(reward));
    journal.push(CombatSide::Player, CombatEvent::Victory);
}
