use serde::Deserialize;

use crate::StatusEffectType;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardEffectType {
    Damage,
    DamageMultiplierBlock,
    DamageMultiplierEnergy,
    Block,
    Heal,
    DrawCards,
    GainEnergy,
    LoseEnergy,
    ApplyStatus,
    AddCardToDiscard,
    UpgradeCard,
}

impl CardEffectType {
    /// Effect kinds that count as the card's damage when deciding whether the
    /// legacy `damage` scalar applies.
    pub fn is_damage(&self) -> bool {
        matches!(
            self,
            CardEffectType::Damage
                | CardEffectType::DamageMultiplierBlock
                | CardEffectType::DamageMultiplierEnergy
        )
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTarget {
    #[serde(rename = "Self", alias = "Player")]
    Player,
    Enemy,
    AllEnemies,
}

impl std::fmt::Display for EffectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectTarget::Player => write!(f, "Self"),
            EffectTarget::Enemy => write!(f, "Enemy"),
            EffectTarget::AllEnemies => write!(f, "AllEnemies"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CardEffect {
    #[serde(rename = "type")]
    pub kind: CardEffectType,
    #[serde(default)]
    pub value: u32,
    pub target: EffectTarget,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(default, rename = "status")]
    pub status_type: Option<StatusEffectType>,
}

impl CardEffect {
    pub fn new(kind: CardEffectType, value: u32, target: EffectTarget) -> Self {
        Self {
            kind,
            value,
            target,
            multiplier: None,
            status_type: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    pub fn with_status(mut self, status_type: StatusEffectType) -> Self {
        self.status_type = Some(status_type);
        self
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status_type, self.multiplier) {
            (Some(status), _) => write!(
                f,
                "{:?}({status} {}, {})",
                self.kind, self.value, self.target
            ),
            (None, Some(multiplier)) => write!(
                f,
                "{:?}({} x{multiplier:.2}, {})",
                self.kind, self.value, self.target
            ),
            (None, None) => write!(f, "{:?}({}, {})", self.kind, self.value, self.target),
        }
    }
}
