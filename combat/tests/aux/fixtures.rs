use combat::{Card, CardTemplate, CombatSession, Enemy, EnemyId, IdAllocator, Player, TurnPhase};
use models::{EnemyMove, EnemyTemplate, IntentType};

lazy_static::lazy_static! {
    pub static ref IDLE_MOVE: EnemyMove = EnemyMove::new("Idle", IntentType::Unknown, 0, 1.0);
}

#[allow(unused)]
pub fn library_card(ids: &mut IdAllocator, id: &str) -> Card {
    CardTemplate::new(id)
        .create_cards(ids)
        .expect("card exists in the library")
        .remove(0)
}

#[allow(unused)]
pub fn dummy_template(health: u32, moves: Vec<EnemyMove>) -> EnemyTemplate {
    EnemyTemplate {
        id: "dummy".to_string(),
        name: "Dummy".to_string(),
        health,
        moves,
    }
}

/// An enemy that has declared `next`.
#[allow(unused)]
pub fn dummy_enemy(ids: &mut IdAllocator, health: u32, next: EnemyMove) -> Enemy {
    let mut enemy = Enemy::from_template(ids.enemy(), &dummy_template(health, vec![next.clone()]), false);
    enemy.next_move = Some(next);
    enemy
}

/// A session in the middle of the player's turn with `hand` in hand and
/// idle enemies of the given health.
#[allow(unused)]
pub fn session_with(hand: &[&str], enemy_health: &[u32]) -> CombatSession {
    let mut ids = IdAllocator::new();
    let hand = hand.iter().map(|id| library_card(&mut ids, id)).collect();
    let enemies = enemy_health
        .iter()
        .map(|health| {
            let enemy = dummy_enemy(&mut ids, *health, IDLE_MOVE.clone());
            (enemy.id, enemy)
        })
        .collect();
    CombatSession {
        player: Player::new(80, 3),
        enemies,
        hand,
        current_turn: TurnPhase::PlayerTurn,
        first_attack_this_combat: true,
        turn: 1,
        ids,
        ..Default::default()
    }
}

#[allow(unused)]
pub fn enemy_ids(session: &CombatSession) -> Vec<EnemyId> {
    session.enemies.keys().copied().collect()
}

#[allow(unused)]
pub fn enemy_health(session: &CombatSession) -> Vec<i64> {
    session
        .enemies
        .values()
        .map(|e| e.combatant.health.current())
        .collect()
}

#[allow(unused)]
pub fn hand_ids(session: &CombatSession) -> Vec<combat::CardId> {
    session.hand.iter().map(|c| c.id).collect()
}
