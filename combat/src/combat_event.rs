use models::{CardType, EnemyIntent, StatusEffectType, Trigger};

use crate::{CardId, DamageOutcome, EnemyId};

/// Who performed an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombatSide {
    Player,
    Enemy(EnemyId),
}

impl std::fmt::Display for CombatSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatSide::Player => write!(f, "Player"),
            CombatSide::Enemy(id) => write!(f, "Enemy<{id}>"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingTarget,
    MissingStatus,
    NeedsCardContext,
    UnknownPower(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CombatEvent {
    CombatStarted,
    TurnStarted(u32),
    CardDrawn(CardId),
    Reshuffled(usize),
    /// Drawn with a full hand and sent straight to the discard pile.
    CardBurned(CardId),
    CardPlayed(CardId, CardType),
    CardExhausted(CardId),
    CardUpgraded(CardId),
    CardAdded(CardId),
    HandDiscarded(usize),
    DealDamage(CombatSide, DamageOutcome),
    PoisonDamage(u32),
    GainBlock(u32),
    Heal(u32),
    EnergyChanged(u32),
    ApplyStatus(CombatSide, StatusEffectType, u32),
    PowerAttached(String),
    Triggered(Trigger, String),
    EnemyMove(String),
    IntentDeclared(EnemyIntent),
    EnemyDefeated,
    Skip(SkipReason),
    Victory,
    Defeat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaggedCombatEvent(pub CombatSide, pub CombatEvent);

impl std::fmt::Display for TaggedCombatEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.0, self.1)
    }
}
