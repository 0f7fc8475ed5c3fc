//! Game integration tests.

use highcard::{
    Card, CardError, DECK_SIZE, Deck, Game, GameError, GameOptions, GameState, MAX_RANK, MIN_RANK,
    Suit,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).unwrap()
}

fn suit_strategy() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (MIN_RANK..=MAX_RANK, suit_strategy()).prop_map(|(rank, suit)| card(rank, suit))
}

#[test]
fn invalid_player_counts_are_rejected() {
    for count in [0, 1, 3, 100] {
        let options = GameOptions::default().with_player_count(count);
        assert_eq!(
            Game::new(options, 1).unwrap_err(),
            GameError::InvalidPlayerCount(count)
        );
    }
}

#[test]
fn two_players_are_seated() {
    let game = Game::new(GameOptions::default(), 1).unwrap();

    assert_eq!(game.state(), GameState::Ready);
    let names: Vec<&str> = game.players().iter().map(|player| player.name()).collect();
    assert_eq!(names, ["Player 1", "Player 2"]);
    assert!(game.player(2).is_none());
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        GameError::InvalidPlayerCount(4).to_string(),
        "incorrect player count specified: expected 2, got 4"
    );
    assert_eq!(
        CardError::InvalidRank(0).to_string(),
        "invalid card rank 0, expected 2 through 14"
    );
}

#[test]
fn sorted_game_is_won_by_second_player() {
    for seed in [0, 1, 42, u64::MAX] {
        let options = GameOptions::default().with_sort_deck(true);
        let mut game = Game::new(options, seed).unwrap();
        game.play();

        assert_eq!(game.player(0).unwrap().score(), 12);
        assert_eq!(game.player(1).unwrap().score(), 15);
        assert_eq!(game.determine_winner(), "Player 2");
    }
}

#[test]
fn shuffled_game_deals_three_cards_each() {
    let mut game = Game::new(GameOptions::default(), 2024).unwrap();
    let result = game.play();

    assert_eq!(result.cards_dealt, 6);
    assert_eq!(result.cards_remaining, DECK_SIZE - 6);
    for player in game.players() {
        assert_eq!(player.hand().len(), 3);
        let total: u32 = player.hand().iter().map(Card::value).sum();
        assert_eq!(player.score(), total);
    }

    let winner = game.determine_winner();
    let [first, second] = [game.player(0).unwrap(), game.player(1).unwrap()];
    let expected = if second.score() > first.score() {
        second.name()
    } else {
        first.name()
    };
    assert_eq!(winner, expected);
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = Game::new(GameOptions::default(), 77).unwrap();
    let mut b = Game::new(GameOptions::default(), 77).unwrap();
    a.play();
    b.play();

    assert_eq!(a.players(), b.players());
}

#[test]
fn determine_winner_does_not_change_players() {
    let mut game = Game::new(GameOptions::default(), 3).unwrap();
    game.play();
    let before = game.players().to_vec();

    let first = game.determine_winner().to_owned();
    let second = game.determine_winner().to_owned();

    assert_eq!(first, second);
    assert_eq!(game.players(), before.as_slice());
}

#[test]
fn whole_deck_can_be_dealt() {
    let options = GameOptions::default().with_cards_per_player(26);
    let mut game = Game::new(options, 8).unwrap();
    let result = game.play();

    assert_eq!(result.cards_dealt, DECK_SIZE);
    assert!(!result.deck_exhausted);

    let mut all: Vec<Card> = game
        .players()
        .iter()
        .flat_map(|player| player.hand().iter().copied())
        .collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn zero_cards_per_player_deals_nothing() {
    let options = GameOptions::default().with_cards_per_player(0);
    let mut game = Game::new(options, 8).unwrap();
    let result = game.play();

    assert_eq!(result.cards_dealt, 0);
    assert_eq!(result.cards_remaining, DECK_SIZE);
    assert_eq!(game.determine_winner(), "Player 1");
}

#[test]
fn card_ordering_examples() {
    assert!(card(3, Suit::Hearts) > card(2, Suit::Hearts));
    assert!(card(14, Suit::Clubs) > card(14, Suit::Spades));
    assert!(card(4, Suit::Hearts) > card(5, Suit::Diamonds));
    assert!(card(6, Suit::Diamonds) > card(13, Suit::Spades));
}

proptest! {
    #[test]
    fn value_is_rank_times_weight(rank in MIN_RANK..=MAX_RANK, suit in suit_strategy()) {
        let card = card(rank, suit);
        prop_assert_eq!(card.value(), u32::from(rank) * u32::from(suit.weight()));
    }

    #[test]
    fn out_of_range_ranks_fail(rank in prop_oneof![0..MIN_RANK, (MAX_RANK + 1)..=u8::MAX], suit in suit_strategy()) {
        prop_assert_eq!(Card::new(rank, suit), Err(CardError::InvalidRank(rank)));
    }

    #[test]
    fn ordering_matches_suit_then_rank(a in card_strategy(), b in card_strategy()) {
        let expected = if a.suit() == b.suit() {
            a.rank().cmp(&b.rank())
        } else {
            a.suit().weight().cmp(&b.suit().weight())
        };
        prop_assert_eq!(a.compare(&b), expected);
        prop_assert_eq!(b.compare(&a), expected.reverse());
    }

    #[test]
    fn shuffle_keeps_membership(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let mut cards: Vec<Card> = deck.cards().copied().collect();
        cards.sort();
        let fresh: Vec<Card> = Deck::new().cards().copied().collect();
        prop_assert_eq!(cards, fresh);
    }

    #[test]
    fn sort_restores_fresh_order(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck.sort();
        prop_assert_eq!(&deck, &Deck::new());
        deck.sort();
        prop_assert_eq!(deck, Deck::new());
    }
}
