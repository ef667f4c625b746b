use serde::Deserialize;

use super::{Card, IdAllocator};

fn default_count() -> usize {
    1
}

/// Reference to a library card inside a TOML template, e.g.
/// `{ id = "strike", count = 5 }`.
#[derive(Clone, Debug, Deserialize)]
pub struct CardTemplate {
    pub id: String,
    #[serde(default)]
    pub upgraded: bool,
    #[serde(default = "default_count")]
    pub count: usize,
}

impl CardTemplate {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            upgraded: false,
            count: 1,
        }
    }

    pub fn library_card(&self) -> anyhow::Result<models::Card> {
        let template = gamedata::card(&self.id)
            .ok_or(anyhow::anyhow!("unknown card {:?}", &self.id))?;
        if !self.upgraded {
            return Ok(template.clone());
        }
        template
            .upgraded()
            .ok_or(anyhow::anyhow!("card {:?} has no upgrade", &self.id))
    }

    pub fn create_cards(&self, ids: &mut IdAllocator) -> anyhow::Result<Vec<Card>> {
        let inner = self.library_card()?;
        Ok((0..self.count)
            .map(|_| Card::new(ids.card(), inner.clone()))
            .collect())
    }
}
