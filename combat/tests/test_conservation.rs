mod aux;

use combat::{
    CardTemplate, CombatController, CombatEvent, IdAllocator, Player, SeededRng, choose_target,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Action {
    Play(usize),
    EndTurn,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..10).prop_map(Action::Play),
        1 => Just(Action::EndTurn),
    ]
}

fn deck(ids: &mut IdAllocator) -> Vec<combat::Card> {
    [
        ("strike", 4),
        ("defend", 4),
        ("bash", 1),
        ("pommel_strike", 1),
        ("anger", 1),
        ("bandage_up", 1),
        ("shrug_it_off", 1),
        ("armaments", 1),
    ]
    .iter()
    .flat_map(|(id, count)| {
        let mut template = CardTemplate::new(id);
        template.count = *count;
        template.create_cards(ids).unwrap()
    })
    .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cards_are_never_lost(seed in any::<u64>(), actions in proptest::collection::vec(action(), 0..60)) {
        let mut ids = IdAllocator::new();
        let deck = deck(&mut ids);
        let size = deck.len();
        let roster = vec![
            gamedata::enemy("jaw_worm").unwrap().clone(),
            gamedata::enemy("louse").unwrap().clone(),
        ];
        let mut controller = CombatController::start(
            Player::new(80, 3),
            deck,
            &roster,
            false,
            ids,
            SeededRng::seed_from_u64(seed),
        );
        for action in actions {
            if controller.session().is_over() {
                break;
            }
            match action {
                Action::Play(index) => {
                    let session = controller.session();
                    let Some(card) = session.hand.get(index % session.hand.len().max(1)) else {
                        continue;
                    };
                    let (card, target) = (card.id, choose_target(session));
                    controller.play_card(card, target);
                }
                Action::EndTurn => controller.end_turn(),
            }
            let added = controller
                .events()
                .iter()
                .filter(|e| matches!(e.1, CombatEvent::CardAdded(..)))
                .count();
            prop_assert_eq!(controller.session().card_count(), size + added);
        }
    }
}
