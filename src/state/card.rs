/// Per-card expand/collapse state
///
/// A card is either collapsed or expanded; a tap flips it. The visual
/// change is animated through an `expansion` value that slides between
/// 0.0 (collapsed) and 1.0 (expanded). Everything the renderer needs,
/// image share, info share and description opacity, is derived from it.

use std::time::{Duration, Instant};

/// Default length of the expand/collapse animation
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(250);

/// The two display states of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == CardState::Expanded
    }

    /// Resting expansion value for this state
    fn expansion(self) -> f32 {
        match self {
            CardState::Collapsed => 0.0,
            CardState::Expanded => 1.0,
        }
    }
}

/// How much of the card's height goes to the image
///
/// `collapsed_image_share` must be larger than `expanded_image_share`;
/// `AppConfig::validate` enforces it for user-supplied values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    pub collapsed_image_share: f32,
    pub expanded_image_share: f32,
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            collapsed_image_share: 0.7,
            expanded_image_share: 0.4,
        }
    }
}

impl Proportions {
    /// Image share for an expansion value in [0, 1]
    pub fn image_share(&self, expansion: f32) -> f32 {
        let t = expansion.clamp(0.0, 1.0);
        self.collapsed_image_share + (self.expanded_image_share - self.collapsed_image_share) * t
    }

    /// Whatever the image doesn't take
    pub fn info_share(&self, expansion: f32) -> f32 {
        1.0 - self.image_share(expansion)
    }
}

/// An in-flight animation between two expansion values
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn value(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * ease_in_out(self.progress(now))
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Smoothstep
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// State of one card on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    state: CardState,
    transition: Option<Transition>,
    duration: Duration,
}

impl Default for Card {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION)
    }
}

impl Card {
    /// A collapsed card whose toggles animate over `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            state: CardState::Collapsed,
            transition: None,
            duration,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Flip the state and start animating toward it
    ///
    /// A toggle during an animation reverses from wherever the card is now.
    pub fn toggle(&mut self, now: Instant) -> CardState {
        let from = self.expansion(now);
        self.state = self.state.toggled();
        self.transition = Some(Transition {
            from,
            to: self.state.expansion(),
            started: now,
            duration: self.duration,
        });
        self.state
    }

    /// Current animated expansion, 0.0 collapsed and 1.0 expanded
    pub fn expansion(&self, now: Instant) -> f32 {
        match &self.transition {
            Some(transition) => transition.value(now),
            None => self.state.expansion(),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
    }

    /// Drop a finished transition
    pub fn settle(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_starts_collapsed() {
        let card = Card::default();
        assert_eq!(card.state(), CardState::Collapsed);
        assert!(!card.is_expanded());
        assert_eq!(card.expansion(Instant::now()), 0.0);
    }

    #[test]
    fn test_toggle_pair_restores_state() {
        let now = Instant::now();
        let mut card = Card::default();
        assert_eq!(card.toggle(now), CardState::Expanded);
        assert_eq!(card.toggle(now), CardState::Collapsed);
        assert_eq!(card.state(), CardState::Collapsed);
    }

    #[test]
    fn test_transition_endpoints() {
        let start = Instant::now();
        let mut card = Card::new(Duration::from_millis(200));
        card.toggle(start);

        assert!(approx(card.expansion(start), 0.0));
        assert!(card.is_animating(start));
        assert!(approx(card.expansion(start + Duration::from_millis(100)), 0.5));

        let end = start + Duration::from_millis(200);
        assert!(approx(card.expansion(end), 1.0));
        assert!(!card.is_animating(end));
    }

    #[test]
    fn test_reverse_mid_animation() {
        let start = Instant::now();
        let mut card = Card::new(Duration::from_millis(200));
        card.toggle(start);

        let midway = start + Duration::from_millis(100);
        card.toggle(midway);
        assert_eq!(card.state(), CardState::Collapsed);
        assert!(approx(card.expansion(midway), 0.5));
        assert!(approx(card.expansion(midway + Duration::from_millis(200)), 0.0));
    }

    #[test]
    fn test_settle_clears_finished_transition() {
        let start = Instant::now();
        let mut card = Card::new(Duration::from_millis(50));
        card.toggle(start);

        card.settle(start);
        assert!(card.is_animating(start));

        let later = start + Duration::from_millis(60);
        card.settle(later);
        assert!(!card.is_animating(later));
        assert_eq!(card.expansion(later), 1.0);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let now = Instant::now();
        let mut card = Card::new(Duration::ZERO);
        card.toggle(now);
        assert_eq!(card.expansion(now), 1.0);
        assert!(!card.is_animating(now));
    }

    #[test]
    fn test_collapsed_image_share_is_larger() {
        let proportions = Proportions::default();
        let collapsed = proportions.image_share(0.0);
        let expanded = proportions.image_share(1.0);
        assert!(collapsed > expanded);
        assert!(approx(collapsed, 0.7));
        assert!(approx(expanded, 0.4));
        assert!(approx(proportions.info_share(0.0), 0.3));
        assert!(approx(proportions.info_share(1.0), 0.6));
    }
}
