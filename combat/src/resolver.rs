use models::{CardCost, CardEffect, CardEffectType, CardType, EffectTarget, Trigger};

use crate::{
    Card, CardId, CombatEvent, CombatRng, CombatSession, CombatSide, Command, EnemyId, Journal,
    SkipReason, Transition, TriggerContext, TurnPhase, apply_damage, apply_passive_effects,
    apply_status_effect, calculate_block, calculate_damage, process_effects, settle,
};

/// The effects a card resolves, in order. Legacy `damage`/`block` scalars are
/// only honoured when the effect list has nothing of the same family.
pub fn resolved_effects(card: &models::Card) -> Vec<CardEffect> {
    let mut effects = Vec::with_capacity(card.effects.len() + 2);
    if let Some(damage) = card.damage {
        if !card.has_effect(|kind| kind.is_damage()) {
            effects.push(CardEffect::new(
                CardEffectType::Damage,
                damage,
                EffectTarget::Enemy,
            ));
        }
    }
    if let Some(block) = card.block {
        if !card.has_effect(|kind| kind == CardEffectType::Block) {
            effects.push(CardEffect::new(
                CardEffectType::Block,
                block,
                EffectTarget::Player,
            ));
        }
    }
    effects.extend(card.effects.iter().cloned());
    effects
}

/// Plays a card from the hand. Commands that are not legal right now leave the
/// session untouched.
#[tracing::instrument(skip_all, fields(card = %card_id, target = ?target))]
pub fn play_card<R: CombatRng>(
    session: CombatSession,
    card_id: CardId,
    target: Option<EnemyId>,
    rng: &mut R,
) -> Transition {
    if session.is_over() || session.current_turn != TurnPhase::PlayerTurn {
        tracing::debug!(phase = ?session.current_turn, "card played outside of the player turn");
        return Transition::unchanged(session);
    }
    let Some(position) = session.hand.iter().position(|c| c.id == card_id) else {
        tracing::debug!("card is not in hand");
        return Transition::unchanged(session);
    };
    if !session.hand[position].is_affordable(session.player.energy) {
        tracing::debug!(energy = session.player.energy, "card is not affordable");
        return Transition::unchanged(session);
    }

    let mut session = session;
    let mut journal = Journal::default();
    let card = session.hand.remove(position);
    let original_energy = session.player.energy;
    session.player.energy = match card.cost() {
        CardCost::Fixed(cost) => original_energy - cost,
        CardCost::X => 0,
    };
    tracing::info!(card = card.name(), energy = original_energy, "playing card");
    journal.push(CombatSide::Player, CombatEvent::CardPlayed(card.id, card.kind()));
    if session.player.energy != original_energy {
        journal.push(
            CombatSide::Player,
            CombatEvent::EnergyChanged(session.player.energy),
        );
    }

    let resolution = Resolution {
        card: &card,
        target,
        original_energy,
    };
    for effect in resolved_effects(&card.inner) {
        resolution.apply(&effect, &mut session, rng, &mut journal);
    }

    if card.inner.exhaust {
        journal.push(CombatSide::Player, CombatEvent::CardExhausted(card.id));
        session.exhaust_pile.push(card.clone());
    } else {
        session.discard_pile.push(card.clone());
    }
    if settle(&mut session, rng, &mut journal) {
        return journal.into_transition(session);
    }

    if card.kind() == CardType::Power {
        attach_power(&mut session, &card, &mut journal);
    }
    let outcome = process_effects(
        Trigger::CardPlayed,
        &mut session.player,
        &mut session.enemies,
        &TriggerContext::card_played(card.kind()),
    );
    journal.absorb(outcome);
    settle(&mut session, rng, &mut journal);
    journal.into_transition(session)
}

/// Attaches the power a card refers to and fires its `CombatStart` effects
/// straight away. Playing the same power twice stacks both copies.
fn attach_power(session: &mut CombatSession, card: &Card, journal: &mut Journal) {
    let Some(power_id) = card.inner.power.as_deref() else {
        tracing::warn!(card = card.name(), "power card without a power");
        return;
    };
    let Some(power) = gamedata::power(power_id) else {
        tracing::warn!(power = power_id, "unknown power");
        journal.push(
            CombatSide::Player,
            CombatEvent::Skip(SkipReason::UnknownPower(power_id.to_string())),
        );
        return;
    };
    session.player.power_cards.push(power.clone());
    journal.push(
        CombatSide::Player,
        CombatEvent::PowerAttached(power.id.clone()),
    );
    let outcome = apply_passive_effects(
        power.effects_for(Trigger::CombatStart),
        &mut session.player,
        &mut session.enemies,
        &TriggerContext::default(),
    );
    journal.absorb(outcome);
}

struct Resolution<'a> {
    card: &'a Card,
    target: Option<EnemyId>,
    original_energy: u32,
}

impl Resolution<'_> {
    fn apply<R: CombatRng>(
        &self,
        effect: &CardEffect,
        session: &mut CombatSession,
        rng: &mut R,
        journal: &mut Journal,
    ) {
        match effect.kind {
            CardEffectType::Damage => {
                self.damage(effect.value, effect.target, session, journal);
            }
            CardEffectType::DamageMultiplierBlock => {
                let base = (session.player.combatant.block as f64
                    * effect.multiplier.unwrap_or(1.0))
                .floor() as u32;
                self.damage(base, effect.target, session, journal);
            }
            CardEffectType::DamageMultiplierEnergy => {
                for _ in 0..self.original_energy {
                    self.damage(effect.value, effect.target, session, journal);
                }
            }
            CardEffectType::Block => {
                let block = calculate_block(effect.value, &session.player.combatant);
                session.player.combatant.gain_block(block);
                journal.push(CombatSide::Player, CombatEvent::GainBlock(block));
            }
            CardEffectType::Heal => {
                let healed = session.player.combatant.heal(effect.value);
                journal.push(CombatSide::Player, CombatEvent::Heal(healed));
            }
            CardEffectType::GainEnergy => {
                session.player.gain_energy(effect.value);
                journal.push(
                    CombatSide::Player,
                    CombatEvent::EnergyChanged(session.player.energy),
                );
            }
            CardEffectType::LoseEnergy => {
                session.player.energy = session.player.energy.saturating_sub(effect.value);
                journal.push(
                    CombatSide::Player,
                    CombatEvent::EnergyChanged(session.player.energy),
                );
            }
            CardEffectType::ApplyStatus => {
                self.apply_status(effect, session, journal);
            }
            CardEffectType::DrawCards => {
                journal.deferred.push(Command::DrawCards(effect.value));
            }
            CardEffectType::AddCardToDiscard => {
                let copy = self.card.duplicate(&mut session.ids);
                journal.push(CombatSide::Player, CombatEvent::CardAdded(copy.id));
                session.discard_pile.push(copy);
            }
            CardEffectType::UpgradeCard => {
                let eligible: Vec<usize> = session
                    .hand
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.inner.can_upgrade())
                    .map(|(i, _)| i)
                    .collect();
                if eligible.is_empty() {
                    return;
                }
                let index = eligible[rng.gen_range(eligible.len())];
                let card = &mut session.hand[index];
                if card.upgrade() {
                    journal.push(CombatSide::Player, CombatEvent::CardUpgraded(card.id));
                }
            }
        }
    }

    fn targets(&self, target: EffectTarget, session: &CombatSession) -> Vec<EnemyId> {
        match target {
            EffectTarget::Player => vec![],
            EffectTarget::Enemy => self
                .target
                .filter(|id| session.enemies.get(id).is_some_and(|e| e.is_alive()))
                .into_iter()
                .collect(),
            EffectTarget::AllEnemies => session.living_enemies().map(|e| e.id).collect(),
        }
    }

    /// One damage application against every target of the effect. The first
    /// one against enemies carries the relic first-attack bonus.
    fn damage(
        &self,
        base: u32,
        target: EffectTarget,
        session: &mut CombatSession,
        journal: &mut Journal,
    ) {
        // Hitting yourself is not an attack and leaves the bonus pending.
        if target == EffectTarget::Player {
            let player = &mut session.player.combatant;
            let damage = calculate_damage(base, &*player, &*player, 0);
            let outcome = apply_damage(player, damage);
            journal.push(
                CombatSide::Player,
                CombatEvent::DealDamage(CombatSide::Player, outcome),
            );
            return;
        }
        let bonus = session.first_attack_bonus();
        let targets = self.targets(target, session);
        if targets.is_empty() {
            journal.push(CombatSide::Player, CombatEvent::Skip(SkipReason::MissingTarget));
            return;
        }
        for id in targets {
            let Some(enemy) = session.enemies.get_mut(&id) else {
                continue;
            };
            let damage = calculate_damage(base, &session.player.combatant, &enemy.combatant, bonus);
            let outcome = apply_damage(&mut enemy.combatant, damage);
            journal.push(
                CombatSide::Player,
                CombatEvent::DealDamage(CombatSide::Enemy(id), outcome),
            );
        }
        session.first_attack_this_combat = false;
    }

    fn apply_status(&self, effect: &CardEffect, session: &mut CombatSession, journal: &mut Journal) {
        let Some(kind) = effect.status_type else {
            tracing::warn!(%effect, "status effect without a status type");
            journal.push(CombatSide::Player, CombatEvent::Skip(SkipReason::MissingStatus));
            return;
        };
        if effect.target == EffectTarget::Player {
            apply_status_effect(&mut session.player.combatant, kind, effect.value);
            journal.push(
                CombatSide::Player,
                CombatEvent::ApplyStatus(CombatSide::Player, kind, effect.value),
            );
            return;
        }
        let targets = self.targets(effect.target, session);
        if targets.is_empty() {
            journal.push(CombatSide::Player, CombatEvent::Skip(SkipReason::MissingTarget));
        }
        for id in targets {
            if let Some(enemy) = session.enemies.get_mut(&id) {
                apply_status_effect(&mut enemy.combatant, kind, effect.value);
                journal.push(
                    CombatSide::Player,
                    CombatEvent::ApplyStatus(CombatSide::Enemy(id), kind, effect.value),
                );
            }
        }
    }
}
