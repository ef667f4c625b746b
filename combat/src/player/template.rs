use serde::Deserialize;

use crate::{Card, CardTemplate, IdAllocator};

use super::Player;

fn default_max_energy() -> u32 {
    *crate::DEFAULT_MAX_ENERGY
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerTemplate {
    pub health: u64,
    #[serde(default)]
    pub current_health: Option<u64>,
    #[serde(default = "default_max_energy")]
    pub max_energy: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub relics: Vec<String>,
    #[serde(default, rename = "cards")]
    pub card_templates: Vec<CardTemplate>,
}

impl PlayerTemplate {
    pub fn create_player(&self) -> anyhow::Result<Player> {
        let mut player = Player::new(self.health, self.max_energy);
        if let Some(current) = self.current_health {
            if current == 0 || current > self.health {
                anyhow::bail!(
                    "current health {current} outside of 1..={}",
                    self.health
                );
            }
            player.combatant.health.0 = current as i64;
        }
        player.gold = self.gold;
        for id in &self.relics {
            let relic =
                gamedata::relic(id).ok_or(anyhow::anyhow!("unknown relic {id:?}"))?;
            player.relics.push(relic.clone());
        }
        Ok(player)
    }

    pub fn create_deck(&self, ids: &mut IdAllocator) -> anyhow::Result<Vec<Card>> {
        let mut deck = Vec::new();
        for template in &self.card_templates {
            let cards = template.create_cards(ids).map_err(|error| {
                anyhow::anyhow!("unable to build deck entry {template:?}: {error}")
            })?;
            deck.extend(cards);
        }
        Ok(deck)
    }
}
