use models::{StatusEffect, StatusEffectType};

use crate::Combatant;

/// Adds stacks to an existing effect of the same kind or appends a new one.
/// Duration-based effects keep duration in step with stacks.
pub fn apply_status_effect(combatant: &mut Combatant, kind: StatusEffectType, stacks: u32) {
    if stacks == 0 {
        return;
    }
    match combatant.statuses.iter_mut().find(|s| s.kind == kind) {
        Some(existing) => {
            existing.stacks += stacks;
            if let Some(duration) = existing.duration.as_mut() {
                *duration += stacks;
            }
        }
        None => combatant.statuses.push(StatusEffect::new(kind, stacks)),
    }
}

/// One round of status upkeep. Returns the poison damage taken.
pub fn process_status_effects(combatant: &mut Combatant) -> u32 {
    let poison = combatant.stacks(StatusEffectType::Poison);
    let lost = if poison > 0 {
        combatant.lose_health(poison)
    } else {
        0
    };
    for status in combatant.statuses.iter_mut() {
        if !status.kind.is_duration_based() {
            continue;
        }
        status.stacks = status.stacks.saturating_sub(1);
        status.duration = status.duration.map(|d| d.saturating_sub(1));
    }
    combatant.statuses.retain(|s| s.stacks > 0);
    lost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_is_persistent() {
        let mut combatant = Combatant::new(20);
        apply_status_effect(&mut combatant, StatusEffectType::Strength, 2);
        process_status_effects(&mut combatant);
        process_status_effects(&mut combatant);
        assert_eq!(combatant.stacks(StatusEffectType::Strength), 2);
    }

    #[test]
    fn poison_ignores_block_and_decays() {
        let mut combatant = Combatant::new(20);
        combatant.block = 10;
        apply_status_effect(&mut combatant, StatusEffectType::Poison, 3);
        assert_eq!(process_status_effects(&mut combatant), 3);
        assert_eq!(combatant.health.current(), 17);
        assert_eq!(combatant.block, 10);
        let poison = combatant.status(StatusEffectType::Poison).cloned();
        assert_eq!(poison.map(|p| (p.stacks, p.duration)), Some((2, Some(2))));
    }

    #[test]
    fn expired_effects_are_removed() {
        let mut combatant = Combatant::new(20);
        apply_status_effect(&mut combatant, StatusEffectType::Weak, 1);
        process_status_effects(&mut combatant);
        assert!(combatant.statuses.is_empty());
    }
}
