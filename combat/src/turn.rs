use models::Trigger;

use crate::{
    CombatEvent, CombatRng, CombatSession, CombatSide, Command, EnemyId, HAND_SIZE, Journal,
    MAX_HAND_SIZE, Transition, TriggerContext, TurnPhase, declare_intent, execute_intent,
    process_effects, process_status_effects, settle,
};

/// Draws up to `count` cards. An empty draw pile is refilled by shuffling the
/// discard pile; drawing stops once both are empty. Cards drawn into a full
/// hand go straight to the discard pile.
pub fn draw<R: CombatRng>(
    session: &mut CombatSession,
    count: u32,
    rng: &mut R,
    journal: &mut Journal,
) {
    for _ in 0..count {
        if session.draw_pile.is_empty() {
            if session.discard_pile.is_empty() {
                break;
            }
            session.draw_pile.append(&mut session.discard_pile);
            rng.shuffle(&mut session.draw_pile);
            journal.push(
                CombatSide::Player,
                CombatEvent::Reshuffled(session.draw_pile.len()),
            );
        }
        let Some(card) = session.draw_pile.pop() else {
            break;
        };
        if session.hand.len() >= *MAX_HAND_SIZE {
            journal.push(CombatSide::Player, CombatEvent::CardBurned(card.id));
            session.discard_pile.push(card);
        } else {
            journal.push(CombatSide::Player, CombatEvent::CardDrawn(card.id));
            session.hand.push(card);
        }
    }
}

/// Ends the player's turn: the hand is discarded, `TurnEnd` effects fire and
/// the enemy turn is scheduled. Block carries over into the enemy turn.
#[tracing::instrument(skip_all, fields(turn = session.turn))]
pub fn end_turn<R: CombatRng>(session: CombatSession, rng: &mut R) -> Transition {
    if session.is_over() || session.current_turn != TurnPhase::PlayerTurn {
        tracing::debug!(phase = ?session.current_turn, "turn ended outside of the player turn");
        return Transition::unchanged(session);
    }
    let mut session = session;
    let mut journal = Journal::default();

    let discarded = session.hand.len();
    session.discard_pile.append(&mut session.hand);
    journal.push(CombatSide::Player, CombatEvent::HandDiscarded(discarded));

    let outcome = process_effects(
        Trigger::TurnEnd,
        &mut session.player,
        &mut session.enemies,
        &TriggerContext::default(),
    );
    journal.absorb(outcome);

    // Passive damage at the end of the turn (e.g. Combust) can finish the fight.
    if settle(&mut session, rng, &mut journal) {
        return journal.into_transition(session);
    }

    session.current_turn = TurnPhase::EnemyTurn;
    journal.deferred.push(Command::ProcessEnemyTurn);
    journal.into_transition(session)
}

/// Resolves the enemy turn and hands control back to the player.
#[tracing::instrument(skip_all, fields(turn = session.turn))]
pub fn process_enemy_turn<R: CombatRng>(session: CombatSession, rng: &mut R) -> Transition {
    if session.is_over() || session.current_turn != TurnPhase::EnemyTurn {
        tracing::debug!(phase = ?session.current_turn, "enemy turn outside of the enemy phase");
        return Transition::unchanged(session);
    }
    let mut session = session;
    let mut journal = Journal::default();

    let poison = process_status_effects(&mut session.player.combatant);
    if poison > 0 {
        journal.push(CombatSide::Player, CombatEvent::PoisonDamage(poison));
    }
    for enemy in session.enemies.values_mut() {
        let poison = process_status_effects(&mut enemy.combatant);
        if poison > 0 {
            journal.push(CombatSide::Enemy(enemy.id), CombatEvent::PoisonDamage(poison));
        }
        enemy.combatant.block = 0;
    }
    if !session.player.is_alive() {
        settle(&mut session, rng, &mut journal);
        return journal.into_transition(session);
    }

    let acting: Vec<EnemyId> = session.enemies.keys().copied().collect();
    for id in acting {
        execute_intent(&mut session, id, &mut journal);
        if !session.player.is_alive() {
            settle(&mut session, rng, &mut journal);
            return journal.into_transition(session);
        }
        if let Some(enemy) = session.enemies.get_mut(&id).filter(|e| e.is_alive()) {
            declare_intent(enemy, rng, &mut journal);
        }
    }
    if settle(&mut session, rng, &mut journal) {
        return journal.into_transition(session);
    }

    session.turn += 1;
    session.player.combatant.block = 0;
    session.player.restore_energy();
    journal.push(
        CombatSide::Player,
        CombatEvent::EnergyChanged(session.player.energy),
    );
    let outcome = process_effects(
        Trigger::TurnStart,
        &mut session.player,
        &mut session.enemies,
        &TriggerContext::default(),
    );
    journal.absorb(outcome);
    session.current_turn = TurnPhase::PlayerTurn;
    journal.push(CombatSide::Player, CombatEvent::TurnStarted(session.turn));
    draw(&mut session, *HAND_SIZE, rng, &mut journal);
    settle(&mut session, rng, &mut journal);
    journal.into_transition(session)
}
