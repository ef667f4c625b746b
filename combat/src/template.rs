use serde::Deserialize;

use crate::{Encounter, PlayerTemplate};

#[derive(Clone, Debug, Deserialize)]
pub struct CombatTemplate {
    pub player: PlayerTemplate,
    pub encounter: Encounter,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(skip, default)]
    pub source: Option<String>,
}

impl CombatTemplate {
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
