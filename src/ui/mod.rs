/// User interface widgets
///
/// - Idea cards (card.rs)

pub mod card;
