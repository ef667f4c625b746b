mod aux;

use aux::{ScriptedRng, enemy_ids, hand_ids, session_with};
use combat::{CombatOutcome, CombatSession, Command, TurnPhase, play_card, reduce};
use models::StatusEffectType;

fn play_all(mut session: CombatSession) -> CombatSession {
    let target = enemy_ids(&session).first().copied();
    let mut rng = ScriptedRng::constant(0.0);
    for card in hand_ids(&session) {
        session = play_card(session, card, target, &mut rng).session;
    }
    session
}

#[test]
fn test_powers_stack_and_clear_on_victory() {
    let session = session_with(&["inflame", "inflame"], &[10]);
    let session = play_all(session);
    assert_eq!(session.player.power_cards.len(), 2);
    assert_eq!(
        session.player.combatant.stacks(StatusEffectType::Strength),
        4
    );

    let mut session = session;
    let mut extra = session_with(&["strike"], &[]).hand;
    extra[0].id = combat::CardId(500);
    session.hand = extra;
    session.player.energy = 1;
    let session = play_all(session);
    assert!(matches!(session.outcome, Some(CombatOutcome::Victory(..))));
    assert!(session.player.power_cards.is_empty());
    assert!(session.player.combatant.statuses.is_empty());
    assert_eq!(session.player.combatant.block, 0);
}

#[test]
fn test_power_start_effects_fire_on_attach() {
    let session = play_all(session_with(&["footwork", "defend"], &[30]));
    assert_eq!(
        session.player.combatant.stacks(StatusEffectType::Dexterity),
        2
    );
    assert_eq!(session.player.combatant.block, 7);
}

#[test]
fn test_rage_reacts_to_attacks_only() {
    let session = play_all(session_with(&["rage", "strike", "defend"], &[30]));
    assert_eq!(session.player.combatant.block, 8);
}

#[test]
fn test_metallicize_blocks_at_turn_end() {
    let session = play_all(session_with(&["metallicize"], &[30]));
    let transition = reduce(session, Command::EndTurn, &mut ScriptedRng::constant(0.0));
    assert_eq!(transition.session.player.combatant.block, 3);
    assert_eq!(transition.session.current_turn, TurnPhase::EnemyTurn);
    assert_eq!(transition.deferred, vec![Command::ProcessEnemyTurn]);
}

#[test]
fn test_combust_can_win_at_turn_end() {
    let session = play_all(session_with(&["combust"], &[5, 4]));
    let transition = reduce(session, Command::EndTurn, &mut ScriptedRng::constant(0.0));
    assert!(transition.session.enemies.is_empty());
    assert!(matches!(
        transition.session.outcome,
        Some(CombatOutcome::Victory(..))
    ));
    assert!(transition.deferred.is_empty());
}

#[test]
fn test_demon_form_grows_every_turn() {
    let mut rng = ScriptedRng::constant(0.0);
    let session = play_all(session_with(&["demon_form"], &[30]));
    let session = reduce(session, Command::EndTurn, &mut rng).session;
    let session = reduce(session, Command::ProcessEnemyTurn, &mut rng).session;
    assert_eq!(session.current_turn, TurnPhase::PlayerTurn);
    assert_eq!(
        session.player.combatant.stacks(StatusEffectType::Strength),
        2
    );
    let session = reduce(session, Command::EndTurn, &mut rng).session;
    let session = reduce(session, Command::ProcessEnemyTurn, &mut rng).session;
    assert_eq!(
        session.player.combatant.stacks(StatusEffectType::Strength),
        4
    );
}
