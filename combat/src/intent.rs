use models::{EnemyMove, IntentType, StatusEffectType, Trigger};

use crate::{
    CombatEvent, CombatRng, CombatSession, CombatSide, DEFAULT_ENEMY_MOVES, Enemy, EnemyId,
    HIGH_HEALTH_THRESHOLD, Health, Journal, LOW_HEALTH_THRESHOLD, TriggerContext, apply_damage,
    apply_status_effect, calculate_block, calculate_damage, process_effects,
};

/// Intent kinds an enemy considers at a given health ratio.
pub fn preferred_intents(ratio: f64) -> [IntentType; 2] {
    if ratio < *LOW_HEALTH_THRESHOLD {
        [IntentType::Defend, IntentType::Buff]
    } else if ratio <= *HIGH_HEALTH_THRESHOLD {
        [IntentType::Attack, IntentType::Buff]
    } else {
        [IntentType::Attack, IntentType::Debuff]
    }
}

/// Picks the next move: filter by health ratio, fall back to the whole deck
/// when nothing matches, then roll weighted by priority.
pub fn select_move<R: CombatRng>(moves: &[EnemyMove], health: &Health, rng: &mut R) -> EnemyMove {
    let moves = if moves.is_empty() {
        DEFAULT_ENEMY_MOVES.as_slice()
    } else {
        moves
    };
    let preferred = preferred_intents(health.fraction().as_fraction());
    let filtered: Vec<&EnemyMove> = moves
        .iter()
        .filter(|m| preferred.contains(&m.intent))
        .collect();
    let candidates = if filtered.is_empty() {
        moves.iter().collect()
    } else {
        filtered
    };

    let total: f64 = candidates.iter().map(|m| m.priority).sum();
    let mut roll = rng.next_f64() * total;
    for candidate in &candidates {
        roll -= candidate.priority;
        if roll <= 0.0 {
            return (*candidate).clone();
        }
    }
    candidates[0].clone()
}

pub fn declare_intent<R: CombatRng>(enemy: &mut Enemy, rng: &mut R, journal: &mut Journal) {
    let next = select_move(&enemy.moves, &enemy.combatant.health, rng);
    journal.push(
        CombatSide::Enemy(enemy.id),
        CombatEvent::IntentDeclared(next.intent()),
    );
    enemy.next_move = Some(next);
}

/// Carries out the move an enemy declared last round.
pub fn execute_intent(session: &mut CombatSession, enemy_id: EnemyId, journal: &mut Journal) {
    let Some(next) = session
        .enemies
        .get(&enemy_id)
        .filter(|e| e.is_alive())
        .and_then(|e| e.next_move.clone())
    else {
        return;
    };
    let side = CombatSide::Enemy(enemy_id);
    journal.push(side, CombatEvent::EnemyMove(next.name.clone()));

    match next.intent {
        IntentType::Attack => {
            let mut taken = 0;
            for _ in 0..next.hits {
                let Some(enemy) = session.enemies.get(&enemy_id).filter(|e| e.is_alive()) else {
                    break;
                };
                if !session.player.is_alive() {
                    break;
                }
                let damage =
                    calculate_damage(next.value, &enemy.combatant, &session.player.combatant, 0);
                let outcome = apply_damage(&mut session.player.combatant, damage);
                journal.push(side, CombatEvent::DealDamage(CombatSide::Player, outcome));
                taken += outcome.after_block;
            }
            // One reaction per attack, however many hits it had.
            if taken > 0 {
                let reaction = process_effects(
                    Trigger::DamageTaken,
                    &mut session.player,
                    &mut session.enemies,
                    &TriggerContext::damage_taken(taken, enemy_id),
                );
                journal.absorb(reaction);
            }
        }
        IntentType::Defend => {
            if let Some(enemy) = session.enemies.get_mut(&enemy_id) {
                let block = calculate_block(next.value, &enemy.combatant);
                enemy.combatant.gain_block(block);
                journal.push(side, CombatEvent::GainBlock(block));
            }
        }
        IntentType::Buff => {
            let kind = next.status.unwrap_or(StatusEffectType::Strength);
            if let Some(enemy) = session.enemies.get_mut(&enemy_id) {
                apply_status_effect(&mut enemy.combatant, kind, next.value);
                journal.push(side, CombatEvent::ApplyStatus(side, kind, next.value));
            }
        }
        IntentType::Debuff => {
            let kind = next.status.unwrap_or(StatusEffectType::Weak);
            apply_status_effect(&mut session.player.combatant, kind, next.value);
            journal.push(
                side,
                CombatEvent::ApplyStatus(CombatSide::Player, kind, next.value),
            );
        }
        IntentType::Unknown => {}
    }
}
