use models::{EnemyTemplate, Relic};
use serde::Deserialize;

use crate::{
    Card, CardId, CombatController, CombatOutcome, CombatRng, CombatSession, IdAllocator, Player,
    PlayerTemplate,
};

/// A fight handed over by the map layer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Encounter {
    pub enemies: Vec<String>,
    #[serde(default)]
    pub elite: bool,
}

impl Encounter {
    pub fn roster(&self) -> anyhow::Result<Vec<EnemyTemplate>> {
        self.enemies
            .iter()
            .map(|id| {
                gamedata::enemy(id)
                    .cloned()
                    .ok_or(anyhow::anyhow!("unknown enemy {id:?}"))
            })
            .collect()
    }
}

/// State that outlives a single combat: the player and the full card pool.
#[derive(Clone, Debug, PartialEq)]
pub struct RunState {
    pub player: Player,
    pub deck: Vec<Card>,
    pub ids: IdAllocator,
}

impl TryFrom<&PlayerTemplate> for RunState {
    type Error = anyhow::Error;

    fn try_from(template: &PlayerTemplate) -> Result<Self, Self::Error> {
        let mut ids = IdAllocator::new();
        let deck = template.create_deck(&mut ids)?;
        Ok(Self {
            player: template.create_player()?,
            deck,
            ids,
        })
    }
}

impl RunState {
    pub fn new(player: Player, deck: Vec<Card>, ids: IdAllocator) -> Self {
        Self { player, deck, ids }
    }

    pub fn start_combat<R: CombatRng>(
        &self,
        encounter: &Encounter,
        rng: R,
    ) -> anyhow::Result<CombatController<R>> {
        let roster = encounter.roster()?;
        tracing::info!(enemies = ?encounter.enemies, elite = encounter.elite, "starting combat");
        Ok(CombatController::start(
            self.player.clone(),
            self.deck.clone(),
            &roster,
            encounter.elite,
            self.ids.clone(),
            rng,
        ))
    }

    /// Folds a finished session back into the run. Every pile returns to the
    /// deck, ordered by card id.
    pub fn finish_combat(&mut self, session: CombatSession) -> Option<CombatOutcome> {
        let CombatSession {
            player,
            hand,
            draw_pile,
            discard_pile,
            exhaust_pile,
            ids,
            outcome,
            ..
        } = session;
        let mut deck: Vec<Card> = hand
            .into_iter()
            .chain(draw_pile)
            .chain(discard_pile)
            .chain(exhaust_pile)
            .collect();
        deck.sort_by_key(|c| c.id);
        self.deck = deck;
        self.player = player;
        self.ids = ids;
        outcome
    }

    pub fn add_card(&mut self, card: &models::Card) -> CardId {
        let card = Card::new(self.ids.card(), card.clone());
        let id = card.id;
        self.deck.push(card);
        id
    }

    pub fn remove_card(&mut self, card_id: CardId) -> Option<Card> {
        let position = self.deck.iter().position(|c| c.id == card_id)?;
        Some(self.deck.remove(position))
    }

    pub fn collect_gold(&mut self, gold: u32) {
        self.player.gold = self.player.gold.saturating_add(gold);
    }

    /// Adds a relic unless it is already owned.
    pub fn take_relic(&mut self, relic: Relic) -> bool {
        if self.player.has_relic(&relic.id) {
            return false;
        }
        self.player.relics.push(relic);
        true
    }
}
