use serde::Deserialize;

use crate::StatusEffectType;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentType {
    Attack,
    Defend,
    Buff,
    Debuff,
    Unknown,
}

/// What an enemy has announced it will do on its next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyIntent {
    pub kind: IntentType,
    pub value: Option<u32>,
}

impl std::fmt::Display for EnemyIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{:?}({value})", self.kind),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

fn default_hits() -> u32 {
    1
}

fn default_priority() -> f64 {
    1.0
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EnemyMove {
    pub name: String,
    pub intent: IntentType,
    #[serde(default)]
    pub value: u32,
    #[serde(default = "default_hits")]
    pub hits: u32,
    #[serde(default = "default_priority")]
    pub priority: f64,
    #[serde(default)]
    pub status: Option<StatusEffectType>,
}

impl EnemyMove {
    pub fn new(name: &str, intent: IntentType, value: u32, priority: f64) -> Self {
        Self {
            name: name.to_string(),
            intent,
            value,
            hits: 1,
            priority,
            status: None,
        }
    }

    pub fn with_status(mut self, status: StatusEffectType) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }

    pub fn intent(&self) -> EnemyIntent {
        let value = match self.intent {
            IntentType::Unknown => None,
            _ => Some(self.value),
        };
        EnemyIntent {
            kind: self.intent,
            value,
        }
    }
}

impl std::fmt::Display for EnemyMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hits > 1 {
            write!(f, "{} ({:?} {}x{})", self.name, self.intent, self.value, self.hits)
        } else {
            write!(f, "{} ({:?} {})", self.name, self.intent, self.value)
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub health: u32,
    #[serde(default)]
    pub moves: Vec<EnemyMove>,
}
