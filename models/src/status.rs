use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffectType {
    Vulnerable,
    Weak,
    Poison,
    Strength,
    Dexterity,
}

impl StatusEffectType {
    /// Duration-based effects lose one stack every time statuses are processed.
    pub fn is_duration_based(&self) -> bool {
        match self {
            StatusEffectType::Vulnerable | StatusEffectType::Weak | StatusEffectType::Poison => {
                true
            }
            StatusEffectType::Strength | StatusEffectType::Dexterity => false,
        }
    }
}

impl std::fmt::Display for StatusEffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEffect {
    pub kind: StatusEffectType,
    pub stacks: u32,
    pub duration: Option<u32>,
}

impl StatusEffect {
    pub fn new(kind: StatusEffectType, stacks: u32) -> Self {
        Self {
            kind,
            stacks,
            duration: kind.is_duration_based().then_some(stacks),
        }
    }
}

impl std::fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.stacks)
    }
}
