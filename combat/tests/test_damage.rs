mod aux;

use combat::{Combatant, apply_damage, apply_status_effect, calculate_block, calculate_damage};
use models::StatusEffectType;
use rstest::rstest;

fn combatant(statuses: &[(StatusEffectType, u32)]) -> Combatant {
    let mut combatant = Combatant::new(40);
    for (kind, stacks) in statuses {
        apply_status_effect(&mut combatant, *kind, *stacks);
    }
    combatant
}

#[rstest]
#[case::plain(6, &[], &[], 0, 6)]
#[case::strength(6, &[(StatusEffectType::Strength, 2)], &[], 0, 8)]
#[case::strength_and_weak(6, &[(StatusEffectType::Strength, 2), (StatusEffectType::Weak, 1)], &[], 0, 6)]
#[case::vulnerable(6, &[], &[(StatusEffectType::Vulnerable, 2)], 0, 9)]
#[case::weak_then_vulnerable(8, &[(StatusEffectType::Weak, 1)], &[(StatusEffectType::Vulnerable, 1)], 0, 9)]
#[case::first_attack_bonus(6, &[], &[], 8, 14)]
#[case::bonus_is_scaled(6, &[], &[(StatusEffectType::Vulnerable, 1)], 8, 21)]
#[case::zero(0, &[(StatusEffectType::Weak, 3)], &[], 0, 0)]
fn test_damage_formula(
    #[case] base: u32,
    #[case] source: &[(StatusEffectType, u32)],
    #[case] target: &[(StatusEffectType, u32)],
    #[case] bonus: u32,
    #[case] expected: u32,
) {
    let source = combatant(source);
    let target = combatant(target);
    assert_eq!(calculate_damage(base, &source, &target, bonus), expected);
}

#[rstest]
#[case(5, 0, 5)]
#[case(5, 2, 7)]
fn test_block_formula(#[case] base: u32, #[case] dexterity: u32, #[case] expected: u32) {
    let source = combatant(&[(StatusEffectType::Dexterity, dexterity)]);
    assert_eq!(calculate_block(base, &source), expected);
}

#[test]
fn test_weak_does_not_touch_block() {
    let source = combatant(&[(StatusEffectType::Weak, 2), (StatusEffectType::Vulnerable, 2)]);
    assert_eq!(calculate_block(8, &source), 8);
}

#[rstest]
#[case::fully_blocked(10, 4, 0, 6, 40)]
#[case::partially_blocked(3, 7, 4, 0, 36)]
#[case::no_block(0, 12, 12, 0, 28)]
#[case::lethal(0, 55, 55, 0, 0)]
fn test_apply_damage(
    #[case] block: u32,
    #[case] damage: u32,
    #[case] after_block: u32,
    #[case] remaining_block: u32,
    #[case] remaining_health: i64,
) {
    let mut target = Combatant::new(40);
    target.block = block;
    let outcome = apply_damage(&mut target, damage);
    assert_eq!(outcome.after_block, after_block);
    assert_eq!(outcome.dealt, after_block.min(40));
    assert_eq!(target.block, remaining_block);
    assert_eq!(target.health.current(), remaining_health);
}
