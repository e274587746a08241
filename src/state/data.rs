/// Shared data structures for the application state
///
/// These structs represent the data model that flows from the catalog,
/// through the shuffled session, to the card renderer.

/// Handle to a localized string in the string table (e.g. "creative_title")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextRef(pub &'static str);

/// Handle to an image asset, without extension (e.g. "creative")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(pub &'static str);

/// One motivational idea
///
/// All four fields are opaque handles; the renderer resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idea {
    /// Short headline (e.g. "Creative")
    pub title: TextRef,
    /// Picture shown at the top of the card
    pub image: ImageRef,
    /// Long-form text, only visible on an expanded card
    pub description: TextRef,
    /// Attribution for the image, always visible
    pub reference: TextRef,
}

/// An idea placed at a 1-based position in the shuffled display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationItem {
    pub idea: Idea,
    /// Display position, starting at 1. Not the catalog index.
    pub position: usize,
}
