use serde::Deserialize;

use crate::{PassiveEffect, Trigger};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PowerCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effects: Vec<PassiveEffect>,
}

impl PowerCard {
    pub fn effects_for(&self, trigger: Trigger) -> impl Iterator<Item = &PassiveEffect> {
        self.effects.iter().filter(move |e| e.trigger == trigger)
    }
}

impl std::fmt::Display for PowerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PowerCard<{}>", self.name)
    }
}
