use indexmap::IndexMap;
use models::{Card, CardType, EnemyMove, EnemyTemplate, PowerCard, Relic};
use serde::Deserialize;

pub const CARDS_TOML: &str = include_str!("../res/cards.toml");
pub const RELICS_TOML: &str = include_str!("../res/relics.toml");
pub const POWERS_TOML: &str = include_str!("../res/powers.toml");
pub const ENEMIES_TOML: &str = include_str!("../res/enemies.toml");

#[derive(Deserialize)]
struct CardFile {
    cards: Vec<Card>,
}

#[derive(Deserialize)]
struct RelicFile {
    relics: Vec<Relic>,
}

#[derive(Deserialize)]
struct PowerFile {
    powers: Vec<PowerCard>,
}

#[derive(Deserialize)]
struct EnemyFile {
    enemies: Vec<EnemyTemplate>,
}

/// Immutable lookup tables for every template the combat engine can
/// instantiate. Iteration order follows the source files.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub cards: IndexMap<String, Card>,
    pub relics: IndexMap<String, Relic>,
    pub powers: IndexMap<String, PowerCard>,
    pub enemies: IndexMap<String, EnemyTemplate>,
}

fn index_by_id<T>(
    kind: &str,
    items: Vec<T>,
    id_of: impl Fn(&T) -> &str,
) -> anyhow::Result<IndexMap<String, T>> {
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        let id = id_of(&item).to_string();
        if map.contains_key(&id) {
            anyhow::bail!("duplicate {kind} id {id:?}");
        }
        map.insert(id, item);
    }
    Ok(map)
}

impl Catalog {
    pub fn from_toml_strs(
        cards: &str,
        relics: &str,
        powers: &str,
        enemies: &str,
    ) -> anyhow::Result<Self> {
        let cards = toml::from_str::<CardFile>(cards)
            .map_err(|error| anyhow::anyhow!("unable to parse card data: {error}"))?;
        let relics = toml::from_str::<RelicFile>(relics)
            .map_err(|error| anyhow::anyhow!("unable to parse relic data: {error}"))?;
        let powers = toml::from_str::<PowerFile>(powers)
            .map_err(|error| anyhow::anyhow!("unable to parse power data: {error}"))?;
        let enemies = toml::from_str::<EnemyFile>(enemies)
            .map_err(|error| anyhow::anyhow!("unable to parse enemy data: {error}"))?;

        let catalog = Self {
            cards: index_by_id("card", cards.cards, |c| &c.id)?,
            relics: index_by_id("relic", relics.relics, |r| &r.id)?,
            powers: index_by_id("power", powers.powers, |p| &p.id)?,
            enemies: index_by_id("enemy", enemies.enemies, |e| &e.id)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_toml_strs(CARDS_TOML, RELICS_TOML, POWERS_TOML, ENEMIES_TOML)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for card in self.cards.values() {
            match (card.kind, &card.power) {
                (CardType::Power, Some(power)) if !self.powers.contains_key(power) => {
                    anyhow::bail!("card {:?} references unknown power {power:?}", card.id)
                }
                (CardType::Power, None) => {
                    anyhow::bail!("power card {:?} has no power definition", card.id)
                }
                (CardType::Attack | CardType::Skill, Some(_)) => {
                    anyhow::bail!("card {:?} is not a power but declares one", card.id)
                }
                _ => {}
            }
        }
        for enemy in self.enemies.values() {
            if enemy.health == 0 {
                anyhow::bail!("enemy {:?} has no health", enemy.id)
            }
            if let Some(m) = enemy.moves.iter().find(|m| m.priority <= 0.0) {
                anyhow::bail!("enemy {:?} move {:?} has no priority", enemy.id, m.name)
            }
        }
        Ok(())
    }
}

lazy_static::lazy_static! {
    pub static ref CATALOG: Catalog = Catalog::bundled().expect("bundled game data must be valid");
}

pub fn get_all_cards() -> impl Iterator<Item = &'static Card> {
    CATALOG.cards.values()
}

pub fn get_all_relics() -> impl Iterator<Item = &'static Relic> {
    CATALOG.relics.values()
}

pub fn card(id: &str) -> Option<&'static Card> {
    CATALOG.cards.get(id)
}

pub fn relic(id: &str) -> Option<&'static Relic> {
    CATALOG.relics.get(id)
}

pub fn power(id: &str) -> Option<&'static PowerCard> {
    CATALOG.powers.get(id)
}

pub fn enemy(id: &str) -> Option<&'static EnemyTemplate> {
    CATALOG.enemies.get(id)
}

/// Move deck for an enemy kind. Unknown kinds yield an empty deck, which the
/// intent selector replaces with its default moves.
pub fn get_enemy_deck(id: &str) -> &'static [EnemyMove] {
    CATALOG
        .enemies
        .get(id)
        .map(|e| e.moves.as_slice())
        .unwrap_or(&[])
}
