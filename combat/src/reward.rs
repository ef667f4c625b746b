use models::{Rarity, Relic};

use crate::{CARD_OFFER_COUNT, CombatRng, ELITE_GOLD_REWARD, NORMAL_GOLD_REWARD, Player};

#[derive(Clone, Debug, PartialEq)]
pub struct CombatReward {
    pub gold: u32,
    pub card_offers: Vec<models::Card>,
    pub relic: Option<Relic>,
}

impl std::fmt::Display for CombatReward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let offers = self
            .card_offers
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        match &self.relic {
            Some(relic) => write!(f, "💰{} [{offers}] + {relic}", self.gold),
            None => write!(f, "💰{} [{offers}]", self.gold),
        }
    }
}

fn roll_in<R: CombatRng>(range: &std::ops::RangeInclusive<u32>, rng: &mut R) -> u32 {
    let width = (range.end() - range.start() + 1) as usize;
    range.start() + rng.gen_range(width) as u32
}

/// Gold, a handful of distinct non-basic cards to pick from and, after an
/// elite, a relic the player does not own yet.
pub fn generate_reward<R: CombatRng>(player: &Player, elite: bool, rng: &mut R) -> CombatReward {
    let gold = if elite {
        roll_in(&ELITE_GOLD_REWARD, rng)
    } else {
        roll_in(&NORMAL_GOLD_REWARD, rng)
    };

    let mut pool: Vec<&models::Card> = gamedata::get_all_cards()
        .filter(|c| c.rarity != Rarity::Basic)
        .collect();
    rng.shuffle(&mut pool);
    let card_offers = pool
        .into_iter()
        .take(*CARD_OFFER_COUNT)
        .cloned()
        .collect();

    let relic = if elite {
        let candidates: Vec<&Relic> = gamedata::get_all_relics()
            .filter(|r| !player.has_relic(&r.id))
            .collect();
        match candidates.len() {
            0 => None,
            n => Some(candidates[rng.gen_range(n)].clone()),
        }
    } else {
        None
    };

    CombatReward {
        gold,
        card_offers,
        relic,
    }
}
