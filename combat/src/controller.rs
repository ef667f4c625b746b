use std::collections::VecDeque;

use models::EnemyTemplate;

use crate::{
    Card, CardId, CombatOutcome, CombatRng, CombatSession, Command, EnemyId, IdAllocator, Player,
    TaggedCombatEvent, Transition, reduce, start_combat,
};

/// Owns a session and its rng, committing one command at a time and flushing
/// any deferred commands in the order they were produced.
#[derive(Debug)]
pub struct CombatController<R: CombatRng> {
    session: CombatSession,
    rng: R,
    events: Vec<TaggedCombatEvent>,
}

impl<R: CombatRng> CombatController<R> {
    pub fn new(session: CombatSession, rng: R) -> Self {
        Self {
            session,
            rng,
            events: Vec::new(),
        }
    }

    pub fn start(
        player: Player,
        deck: Vec<Card>,
        roster: &[EnemyTemplate],
        elite: bool,
        ids: IdAllocator,
        mut rng: R,
    ) -> Self {
        let transition = start_combat(player, deck, roster, elite, ids, &mut rng);
        let mut controller = Self::new(CombatSession::default(), rng);
        controller.apply(transition);
        controller
    }

    pub fn session(&self) -> &CombatSession {
        &self.session
    }

    pub fn outcome(&self) -> Option<&CombatOutcome> {
        self.session.outcome.as_ref()
    }

    pub fn events(&self) -> &[TaggedCombatEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<TaggedCombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn into_session(self) -> CombatSession {
        self.session
    }

    pub fn play_card(&mut self, card_id: CardId, target: Option<EnemyId>) {
        self.commit(Command::PlayCard { card_id, target });
    }

    pub fn end_turn(&mut self) {
        self.commit(Command::EndTurn);
    }

    pub fn process_enemy_turn(&mut self) {
        self.commit(Command::ProcessEnemyTurn);
    }

    pub fn draw_cards(&mut self, count: u32) {
        self.commit(Command::DrawCards(count));
    }

    pub fn commit(&mut self, command: Command) {
        let session = std::mem::take(&mut self.session);
        let transition = reduce(session, command, &mut self.rng);
        self.apply(transition);
    }

    fn apply(&mut self, transition: Transition) {
        let mut queue: VecDeque<Command> = transition.deferred.into();
        self.session = transition.session;
        self.events.extend(transition.events);
        while let Some(command) = queue.pop_front() {
            let session = std::mem::take(&mut self.session);
            let transition = reduce(session, command, &mut self.rng);
            self.session = transition.session;
            self.events.extend(transition.events);
            queue.extend(transition.deferred);
        }
    }
}
