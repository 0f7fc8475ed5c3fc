use log::{debug, trace, warn};

use crate::deck::Deck;
use crate::player::Player;
use crate::result::PlayResult;

use super::{Game, GameState};

impl Game {
    /// Builds a deck and deals it out to the players.
    ///
    /// The deck is shuffled and, if [`GameOptions::sort_deck`] is set,
    /// sorted afterwards, which makes the deal order fixed. Cards go out one
    /// at a time starting with the first player and rotating. Dealing stops
    /// early, without error, if the deck runs out.
    ///
    /// Hands from an earlier play are discarded first.
    ///
    /// [`GameOptions::sort_deck`]: crate::GameOptions::sort_deck
    pub fn play(&mut self) -> PlayResult {
        for player in &mut self.players {
            player.clear();
        }

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        if self.options.sort_deck {
            deck.sort();
        }
        debug!(
            "deck ready: {} cards, sorted={}",
            deck.len(),
            self.options.sort_deck
        );

        let target = self.options.cards_to_deal();
        let mut current = 0;
        let mut dealt = 0;

        while dealt < target {
            let Some(card) = deck.deal() else {
                warn!("deck exhausted after {dealt} of {target} cards");
                break;
            };
            let player = &mut self.players[current];
            trace!("{} receives {card}", player.name());
            player.add_card(card);

            current = (current + 1) % self.players.len();
            dealt += 1;
        }

        self.state = GameState::Dealt;

        PlayResult {
            cards_dealt: dealt,
            cards_remaining: deck.len(),
            deck_exhausted: dealt < target,
        }
    }

    /// Returns the name of the player with the highest score.
    ///
    /// A later player only takes the lead with a strictly higher score, so
    /// on a tie the earlier player wins.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default().with_sort_deck(true), 1).unwrap();
    /// game.play();
    /// assert_eq!(game.determine_winner(), "Player 2");
    /// ```
    #[must_use]
    pub fn determine_winner(&self) -> &str {
        let winner = self.leader();
        debug!("{} leads with score {}", winner.name(), winner.score());
        winner.name()
    }

    fn leader(&self) -> &Player {
        let [first, rest @ ..] = &self.players;
        rest.iter()
            .fold(first, |best, player| if player.outscores(best) { player } else { best })
    }
}
