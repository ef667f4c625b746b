use models::StatusEffectType;

use crate::{Combatant, VULNERABLE_MULTIPLIER, WEAK_MULTIPLIER};

/// What happened when a final damage value hit a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Damage left over once block was spent.
    pub after_block: u32,
    pub blocked: u32,
    /// Health actually removed.
    pub dealt: u32,
}

/// Final attack damage: base, plus the source's Strength and any first-attack
/// bonus, then Weak on the source, then Vulnerable on the target.
pub fn calculate_damage(
    base: u32,
    source: &Combatant,
    target: &Combatant,
    first_attack_bonus: u32,
) -> u32 {
    let mut value = base as f64
        + source.stacks(StatusEffectType::Strength) as f64
        + first_attack_bonus as f64;
    if source.has_status(StatusEffectType::Weak) {
        value = (value * *WEAK_MULTIPLIER).floor();
    }
    if target.has_status(StatusEffectType::Vulnerable) {
        value = (value * *VULNERABLE_MULTIPLIER).floor();
    }
    value.max(0.0) as u32
}

pub fn calculate_block(base: u32, source: &Combatant) -> u32 {
    base.saturating_add(source.stacks(StatusEffectType::Dexterity))
}

pub fn apply_damage(target: &mut Combatant, damage: u32) -> DamageOutcome {
    let blocked = damage.min(target.block);
    let after_block = damage - blocked;
    target.block -= blocked;
    let dealt = target.lose_health(after_block);
    DamageOutcome {
        after_block,
        blocked,
        dealt,
    }
}

#[cfg(test)]
mod tests {
    use models::StatusEffect;

    use super::*;

    fn with_statuses(statuses: &[(StatusEffectType, u32)]) -> Combatant {
        let mut combatant = Combatant::new(50);
        combatant.statuses = statuses
            .iter()
            .map(|(kind, stacks)| StatusEffect::new(*kind, *stacks))
            .collect();
        combatant
    }

    #[test]
    fn weak_rounds_down_before_vulnerable() {
        let source = with_statuses(&[(StatusEffectType::Weak, 1)]);
        let target = with_statuses(&[(StatusEffectType::Vulnerable, 1)]);
        // floor(floor(9 * 0.75) * 1.5) = floor(6 * 1.5) = 9
        assert_eq!(calculate_damage(9, &source, &target, 0), 9);
    }

    #[test]
    fn block_absorbs_before_health() {
        let mut target = Combatant::new(10);
        target.block = 4;
        let outcome = apply_damage(&mut target, 7);
        assert_eq!(
            outcome,
            DamageOutcome {
                after_block: 3,
                blocked: 4,
                dealt: 3
            }
        );
        assert_eq!(target.block, 0);
        assert_eq!(target.health.current(), 7);
    }

    #[test]
    fn overkill_is_clamped() {
        let mut target = Combatant::new(5);
        let outcome = apply_damage(&mut target, 12);
        assert_eq!(outcome.after_block, 12);
        assert_eq!(outcome.dealt, 5);
        assert_eq!(target.health.current(), 0);
    }

    #[test]
    fn dexterity_adds_to_block() {
        let source = with_statuses(&[(StatusEffectType::Dexterity, 2)]);
        assert_eq!(calculate_block(5, &source), 7);
    }
}
