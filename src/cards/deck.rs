//! Decks and card selection.
//!
//! A deck is a pool, not a draw pile: selection returns an index into
//! the deck and the caller copies the card out. Sampling is always with
//! replacement.

use im::Vector;
use smallvec::SmallVec;

use super::definition::{ActionCard, CardCategory, Intensity};
use crate::core::RandomSource;

/// A deck of cards.
pub type Deck = Vector<ActionCard>;

/// Candidate indices, inline for typical deck sizes.
pub type Candidates = SmallVec<[usize; 32]>;

/// Optional draw preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawFilter {
    pub category: Option<CardCategory>,
    pub intensity: Option<Intensity>,
}

impl DrawFilter {
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(category: CardCategory) -> Self {
        Self { category: Some(category), intensity: None }
    }

    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    fn matches(&self, card: &ActionCard) -> bool {
        self.category.map_or(true, |c| card.category == c)
            && self.intensity.map_or(true, |i| card.intensity == i)
    }
}

/// Indices of the cards matching `filter`.
///
/// Falls back to every index when nothing matches, so the result is
/// empty only when the deck is.
#[must_use]
pub fn candidates(deck: &Deck, filter: DrawFilter) -> Candidates {
    let matching: Candidates = deck
        .iter()
        .enumerate()
        .filter(|(_, card)| filter.matches(card))
        .map(|(i, _)| i)
        .collect();

    if matching.is_empty() {
        (0..deck.len()).collect()
    } else {
        matching
    }
}

/// Pick one card uniformly among the candidates for `filter`.
///
/// Shuffles the candidate indices and takes the first.
pub fn select<R: RandomSource + ?Sized>(
    deck: &Deck,
    filter: DrawFilter,
    random: &mut R,
) -> Option<ActionCard> {
    let mut pool = candidates(deck, filter);
    random.shuffle_indices(&mut pool);
    pool.first().and_then(|&i| deck.get(i)).cloned()
}

/// Find a card by id (first match; custom cards may share ids).
#[must_use]
pub fn find_by_id<'a>(deck: &'a Deck, id: &str) -> Option<&'a ActionCard> {
    deck.iter().find(|card| card.id == id)
}

/// Built-in action deck. Covers every category and intensity.
#[must_use]
pub fn default_action_deck() -> Deck {
    use CardCategory::*;
    use Intensity::*;

    let back = "Move back 3 spaces";
    let forward = "Move forward 2 spaces";

    Vector::from(vec![
        ActionCard::new("truth-1", "Share a secret nobody here knows", Mild, Truth),
        ActionCard::new("truth-2", "Tell us about your most embarrassing moment", Medium, Truth)
            .with_punishment(back),
        ActionCard::new("truth-3", "Reveal your biggest regret", Intense, Truth)
            .with_punishment(back)
            .with_reward(forward),
        ActionCard::new("dare-1", "Give the player on your left a compliment", Mild, Dare),
        ActionCard::new("dare-2", "Dance for 30 seconds", Medium, Dare)
            .with_timer(30)
            .with_punishment(back),
        ActionCard::new("dare-3", "Sing the chorus of a song chosen by the group", Intense, Dare)
            .with_timer(60)
            .with_punishment(back)
            .with_reward(forward),
        ActionCard::new("challenge-1", "Name five animals in ten seconds", Mild, Challenge)
            .with_timer(10),
        ActionCard::new("challenge-2", "Hold a plank for 45 seconds", Medium, Challenge)
            .with_timer(45)
            .with_punishment(back),
        ActionCard::new("challenge-3", "Do 20 push-ups", Intense, Challenge)
            .with_timer(90)
            .with_punishment(back)
            .with_reward(forward),
        ActionCard::new("punishment-1", "Speak in an accent until your next turn", Mild, Punishment),
        ActionCard::new("punishment-2", "Let the group pick your next dare", Medium, Punishment)
            .with_punishment(back),
        ActionCard::new("reward-1", "Pick someone to take your next dare", Mild, Reward)
            .with_reward(forward),
        ActionCard::new("reward-2", "Make up a new house rule", Medium, Reward)
            .with_reward(forward),
        ActionCard::new("wild-1", "Truth or dare, your choice", Mild, Wild),
        ActionCard::new("wild-2", "Swap seats with any player", Medium, Wild),
        ActionCard::new("wild-3", "Everyone does your dare with you", Intense, Wild)
            .with_timer(60)
            .with_punishment(back),
    ])
}

/// Built-in punishment deck.
#[must_use]
pub fn default_punishment_deck() -> Deck {
    use CardCategory::Punishment;
    use Intensity::*;

    Vector::from(vec![
        ActionCard::new("p-1", "Move back 3 spaces", Mild, Punishment),
        ActionCard::new("p-2", "You skip your next turn", Medium, Punishment),
        ActionCard::new("p-3", "Take a sip of water and go back 3 spaces", Medium, Punishment),
        ActionCard::new("p-4", "Do your next action at the next intensity", Intense, Punishment),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_default_deck_covers_every_category_and_intensity() {
        let deck = default_action_deck();

        for category in CardCategory::ALL {
            assert!(deck.iter().any(|c| c.category == category), "missing {category}");
        }
        for intensity in Intensity::ALL {
            assert!(deck.iter().any(|c| c.intensity == intensity), "missing {intensity}");
        }
    }

    #[test]
    fn test_candidates_filter_by_category_then_intensity() {
        let deck = default_action_deck();

        let truths = candidates(&deck, DrawFilter::category(CardCategory::Truth));
        assert_eq!(truths.len(), 3);
        assert!(truths.iter().all(|&i| deck[i].category == CardCategory::Truth));

        let intense_dares = candidates(
            &deck,
            DrawFilter::category(CardCategory::Dare).with_intensity(Intensity::Intense),
        );
        assert_eq!(intense_dares.len(), 1);
        assert_eq!(deck[intense_dares[0]].id, "dare-3");
    }

    #[test]
    fn test_candidates_fall_back_to_full_deck() {
        let deck: Deck = Vector::from(vec![
            ActionCard::new("a", "A", Intensity::Mild, CardCategory::Dare),
            ActionCard::new("b", "B", Intensity::Medium, CardCategory::Dare),
        ]);

        let pool = candidates(&deck, DrawFilter::category(CardCategory::Truth));
        assert_eq!(pool.as_slice(), &[0, 1]);

        let pool = candidates(
            &deck,
            DrawFilter::category(CardCategory::Dare).with_intensity(Intensity::Intense),
        );
        assert_eq!(pool.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_select_respects_filter() {
        let deck = default_action_deck();
        let mut rng = GameRng::new(42);

        for _ in 0..30 {
            let card = select(&deck, DrawFilter::category(CardCategory::Wild), &mut rng).unwrap();
            assert_eq!(card.category, CardCategory::Wild);
        }
    }

    #[test]
    fn test_select_does_not_remove_from_deck() {
        let deck = default_action_deck();
        let mut rng = GameRng::new(1);
        let before = deck.len();

        for _ in 0..10 {
            select(&deck, DrawFilter::any(), &mut rng).unwrap();
        }

        assert_eq!(deck.len(), before);
    }

    #[test]
    fn test_select_on_empty_deck() {
        let deck = Deck::new();
        let mut rng = GameRng::new(1);
        assert!(select(&deck, DrawFilter::any(), &mut rng).is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let mut deck = default_action_deck();
        deck.push_back(ActionCard::new("truth-1", "Shadow", Intensity::Intense, CardCategory::Truth));

        let found = find_by_id(&deck, "truth-1").unwrap();
        assert_eq!(found.intensity, Intensity::Mild);
        assert!(find_by_id(&deck, "nope").is_none());
    }

    #[test]
    fn test_punishment_deck_has_positional_and_skip_cards() {
        use super::super::definition::PunishmentEffect;

        let deck = default_punishment_deck();
        assert!(deck.iter().any(|c| matches!(c.punishment_effect(), PunishmentEffect::MoveBack(3))));
        assert!(deck.iter().any(|c| c.punishment_effect() == PunishmentEffect::SkipTurn));
    }
}
