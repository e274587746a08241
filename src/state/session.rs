/// One visit to the idea screen
///
/// Entering the screen shuffles the catalog exactly once. The resulting
/// order, and the 1-based positions assigned from it, stay fixed until the
/// session is replaced, no matter how many times cards are toggled or the
/// view is redrawn.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

use super::card::{Card, CardState};
use super::catalog::Catalog;
use super::data::PresentationItem;

/// Shuffle the catalog and number the result from 1
///
/// Every permutation is equally likely. An empty catalog gives an empty list.
pub fn build_display_list<R: Rng + ?Sized>(
    catalog: &Catalog<'_>,
    rng: &mut R,
) -> Vec<PresentationItem> {
    let mut ideas = catalog.items().to_vec();
    ideas.shuffle(rng);

    ideas
        .into_iter()
        .enumerate()
        .map(|(index, idea)| PresentationItem {
            idea,
            position: index + 1,
        })
        .collect()
}

/// The shuffled list plus one card per item
#[derive(Debug, Clone)]
pub struct Session {
    items: Vec<PresentationItem>,
    /// Indexed by `position - 1`
    cards: Vec<Card>,
}

impl Session {
    /// Start a session with a freshly seeded generator
    pub fn new(catalog: &Catalog<'_>, animation: Duration) -> Self {
        let mut rng = StdRng::from_os_rng();
        Self::with_rng(catalog, &mut rng, animation)
    }

    /// Start a session from an explicit generator
    pub fn with_rng<R: Rng + ?Sized>(
        catalog: &Catalog<'_>,
        rng: &mut R,
        animation: Duration,
    ) -> Self {
        let items = build_display_list(catalog, rng);
        let cards = vec![Card::new(animation); items.len()];

        tracing::info!("New session with {} ideas", items.len());

        Session { items, cards }
    }

    /// Items in display order
    pub fn items(&self) -> &[PresentationItem] {
        &self.items
    }

    /// Items paired with their cards, in display order
    pub fn entries(&self) -> impl Iterator<Item = (&PresentationItem, &Card)> {
        self.items.iter().zip(self.cards.iter())
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        position.checked_sub(1).and_then(|index| self.cards.get(index))
    }

    /// Toggle the card at `position`; other cards are untouched
    ///
    /// Returns the new state, or `None` for a position not in this session.
    pub fn toggle(&mut self, position: usize, now: Instant) -> Option<CardState> {
        let Some(card) = position
            .checked_sub(1)
            .and_then(|index| self.cards.get_mut(index))
        else {
            tracing::warn!("Ignoring toggle for unknown position {}", position);
            return None;
        };

        let state = card.toggle(now);
        tracing::debug!("Card {} is now {:?}", position, state);
        Some(state)
    }

    /// Drop finished animations
    pub fn tick(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.settle(now);
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|card| card.is_animating(now))
    }

    pub fn expanded_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_expanded()).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
