/// State management module
///
/// This module holds everything the screen shows, independent of iced:
/// - The fixed idea catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - The built-in string table (strings.rs)
/// - Per-card expand/collapse state (card.rs)
/// - The shuffled list for one screen visit (session.rs)

pub mod card;
pub mod catalog;
pub mod data;
pub mod session;
pub mod strings;
