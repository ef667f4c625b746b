use models::{EnemyMove, IntentType};

lazy_static::lazy_static! {
    pub static ref HAND_SIZE: u32 = 5;
    pub static ref MAX_HAND_SIZE: usize = 10;
    pub static ref DEFAULT_MAX_ENERGY: u32 = 3;
    /// Energy gained mid-turn may exceed `max_energy` by at most this much.
    pub static ref ENERGY_CAP_BONUS: u32 = 3;
    pub static ref WEAK_MULTIPLIER: f64 = 0.75;
    pub static ref VULNERABLE_MULTIPLIER: f64 = 1.5;
    pub static ref LOW_HEALTH_THRESHOLD: f64 = 0.3;
    pub static ref HIGH_HEALTH_THRESHOLD: f64 = 0.6;
    pub static ref ELITE_HEALTH_MULTIPLIER: f64 = 1.5;
    pub static ref NORMAL_GOLD_REWARD: std::ops::RangeInclusive<u32> = 10..=20;
    pub static ref ELITE_GOLD_REWARD: std::ops::RangeInclusive<u32> = 25..=35;
    pub static ref CARD_OFFER_COUNT: usize = 3;
    pub static ref MAX_AUTOPLAY_TURNS: u32 = 200;
    pub static ref MAX_PLAYS_PER_TURN: usize = 64;
    pub static ref DEFAULT_ENEMY_MOVES: Vec<EnemyMove> = vec![
        EnemyMove::new("Attack", IntentType::Attack, 6, 1.0),
        EnemyMove::new("Defend", IntentType::Defend, 5, 1.0),
    ];
}
