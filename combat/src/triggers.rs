use indexmap::IndexMap;
use models::{CardEffectType, CardType, EffectTarget, PassiveEffect, Trigger};

use crate::{
    CombatEvent, CombatSide, Command, Enemy, EnemyId, Player, SkipReason,
    TaggedCombatEvent, apply_damage, apply_status_effect, calculate_damage,
};

/// Extra information about the event that caused a trigger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerContext {
    /// Damage taken after block, for `DamageTaken`.
    pub damage: Option<u32>,
    /// The enemy responsible, used as the target of `Enemy` effects.
    pub source: Option<EnemyId>,
    /// Type of the card that was played, for `CardPlayed`.
    pub card_type: Option<CardType>,
}

impl TriggerContext {
    pub fn damage_taken(damage: u32, source: EnemyId) -> Self {
        Self {
            damage: Some(damage),
            source: Some(source),
            card_type: None,
        }
    }

    pub fn card_played(card_type: CardType) -> Self {
        Self {
            card_type: Some(card_type),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerOutcome {
    pub deferred: Vec<Command>,
    pub events: Vec<TaggedCombatEvent>,
}

impl TriggerOutcome {
    fn push(&mut self, side: CombatSide, event: CombatEvent) {
        self.events.push(TaggedCombatEvent(side, event));
    }
}

/// Runs every passive effect that reacts to `trigger`: attached power cards
/// first, then relics, each in the order they were gained.
pub fn process_effects(
    trigger: Trigger,
    player: &mut Player,
    enemies: &mut IndexMap<EnemyId, Enemy>,
    context: &TriggerContext,
) -> TriggerOutcome {
    let mut outcome = TriggerOutcome::default();
    if trigger == Trigger::FirstAttack {
        return outcome;
    }
    let sources: Vec<(String, PassiveEffect)> = player
        .power_cards
        .iter()
        .flat_map(|p| p.effects_for(trigger).map(move |e| (p.name.clone(), e.clone())))
        .chain(
            player
                .relics
                .iter()
                .flat_map(|r| r.effects_for(trigger).map(move |e| (r.name.clone(), e.clone()))),
        )
        .filter(|(_, e)| e.matches(trigger, context.card_type))
        .collect();
    for (name, effect) in sources {
        outcome.push(CombatSide::Player, CombatEvent::Triggered(trigger, name));
        apply_passive_effect(&effect, player, enemies, context, &mut outcome);
    }
    outcome
}

/// Runs a fixed set of passive effects regardless of where they came from,
/// e.g. the `CombatStart` effects of a freshly attached power.
pub fn apply_passive_effects<'a>(
    effects: impl Iterator<Item = &'a PassiveEffect>,
    player: &mut Player,
    enemies: &mut IndexMap<EnemyId, Enemy>,
    context: &TriggerContext,
) -> TriggerOutcome {
    let mut outcome = TriggerOutcome::default();
    for effect in effects {
        apply_passive_effect(effect, player, enemies, context, &mut outcome);
    }
    outcome
}

fn passive_targets(
    target: EffectTarget,
    enemies: &IndexMap<EnemyId, Enemy>,
    context: &TriggerContext,
) -> Vec<EnemyId> {
    match target {
        EffectTarget::Player => vec![],
        EffectTarget::Enemy => context
            .source
            .filter(|id| enemies.get(id).is_some_and(Enemy::is_alive))
            .into_iter()
            .collect(),
        EffectTarget::AllEnemies => enemies
            .values()
            .filter(|e| e.is_alive())
            .map(|e| e.id)
            .collect(),
    }
}

fn apply_passive_effect(
    passive: &PassiveEffect,
    player: &mut Player,
    enemies: &mut IndexMap<EnemyId, Enemy>,
    context: &TriggerContext,
    outcome: &mut TriggerOutcome,
) {
    let effect = &passive.effect;
    match effect.kind {
        CardEffectType::Damage | CardEffectType::DamageMultiplierBlock => {
            let base = match effect.kind {
                CardEffectType::DamageMultiplierBlock => {
                    (player.combatant.block as f64 * effect.multiplier.unwrap_or(1.0)).floor()
                        as u32
                }
                _ => effect.value,
            };
            if effect.target == EffectTarget::Player {
                let damage = calculate_damage(base, &player.combatant, &player.combatant, 0);
                let result = apply_damage(&mut player.combatant, damage);
                outcome.push(
                    CombatSide::Player,
                    CombatEvent::DealDamage(CombatSide::Player, result),
                );
                return;
            }
            let targets = passive_targets(effect.target, enemies, context);
            if targets.is_empty() {
                outcome.push(CombatSide::Player, CombatEvent::Skip(SkipReason::MissingTarget));
            }
            for id in targets {
                let Some(enemy) = enemies.get_mut(&id) else {
                    continue;
                };
                let damage = calculate_damage(base, &player.combatant, &enemy.combatant, 0);
                let result = apply_damage(&mut enemy.combatant, damage);
                outcome.push(
                    CombatSide::Player,
                    CombatEvent::DealDamage(CombatSide::Enemy(id), result),
                );
            }
        }
        CardEffectType::Block => {
            player.combatant.gain_block(effect.value);
            outcome.push(CombatSide::Player, CombatEvent::GainBlock(effect.value));
        }
        CardEffectType::Heal => {
            let healed = player.combatant.heal(effect.value);
            outcome.push(CombatSide::Player, CombatEvent::Heal(healed));
        }
        CardEffectType::GainEnergy => {
            player.gain_energy(effect.value);
            outcome.push(CombatSide::Player, CombatEvent::EnergyChanged(player.energy));
        }
        CardEffectType::LoseEnergy => {
            player.energy = player.energy.saturating_sub(effect.value);
            outcome.push(CombatSide::Player, CombatEvent::EnergyChanged(player.energy));
        }
        CardEffectType::ApplyStatus => {
            let Some(kind) = effect.status_type else {
                tracing::warn!(%effect, "status effect without a status type");
                outcome.push(CombatSide::Player, CombatEvent::Skip(SkipReason::MissingStatus));
                return;
            };
            if effect.target == EffectTarget::Player {
                apply_status_effect(&mut player.combatant, kind, effect.value);
                outcome.push(
                    CombatSide::Player,
                    CombatEvent::ApplyStatus(CombatSide::Player, kind, effect.value),
                );
                return;
            }
            for id in passive_targets(effect.target, enemies, context) {
                if let Some(enemy) = enemies.get_mut(&id) {
                    apply_status_effect(&mut enemy.combatant, kind, effect.value);
                    outcome.push(
                        CombatSide::Player,
                        CombatEvent::ApplyStatus(CombatSide::Enemy(id), kind, effect.value),
                    );
                }
            }
        }
        CardEffectType::DrawCards => {
            outcome.deferred.push(Command::DrawCards(effect.value));
        }
        CardEffectType::DamageMultiplierEnergy
        | CardEffectType::AddCardToDiscard
        | CardEffectType::UpgradeCard => {
            tracing::warn!(%effect, "effect needs a played card and is ignored");
            outcome.push(
                CombatSide::Player,
                CombatEvent::Skip(SkipReason::NeedsCardContext),
            );
        }
    }
}
