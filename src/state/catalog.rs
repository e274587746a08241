use super::data::{Idea, ImageRef, TextRef};

/// Build an `Idea` whose handles all derive from one resource name
macro_rules! idea {
    ($name:ident) => {
        Idea {
            title: TextRef(concat!(stringify!($name), "_title")),
            image: ImageRef(stringify!($name)),
            description: TextRef(concat!(stringify!($name), "_desc")),
            reference: TextRef(concat!(stringify!($name), "_ref")),
        }
    };
}

/// The thirty built-in ideas, in author order
pub static IDEAS: [Idea; 30] = [
    idea!(creative),
    idea!(mindful),
    idea!(respectful),
    idea!(brave),
    idea!(helpful),
    idea!(smart),
    idea!(happy),
    idea!(funny),
    idea!(calm),
    idea!(yourself),
    idea!(good),
    idea!(careful),
    idea!(different),
    idea!(casual),
    idea!(powerful),
    idea!(special),
    idea!(strong),
    idea!(exciting),
    idea!(responsible),
    idea!(nice),
    idea!(selfless),
    idea!(caring),
    idea!(positive),
    idea!(capable),
    idea!(organized),
    idea!(sharp),
    idea!(thankful),
    idea!(hygienic),
    idea!(determined),
    idea!(free),
];

/// Read-only view over an ordered set of ideas
///
/// The application uses `Catalog::builtin()`; any other slice works too,
/// which is how the list builder is exercised with small or empty inputs.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    ideas: &'a [Idea],
}

impl Catalog<'static> {
    /// The thirty ideas shipped with the app
    pub fn builtin() -> Self {
        Catalog { ideas: &IDEAS }
    }
}

impl<'a> Catalog<'a> {
    pub fn new(ideas: &'a [Idea]) -> Self {
        Catalog { ideas }
    }

    /// All ideas, always in the same order
    pub fn items(&self) -> &'a [Idea] {
        self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_thirty_ideas() {
        assert_eq!(Catalog::builtin().len(), 30);
    }

    #[test]
    fn test_items_are_stable() {
        let first = Catalog::builtin().items().to_vec();
        let second = Catalog::builtin().items().to_vec();
        assert_eq!(first, second);
        assert_eq!(first[0].title, TextRef("creative_title"));
        assert_eq!(first[29].image, ImageRef("free"));
    }

    #[test]
    fn test_ideas_are_distinct() {
        let titles: HashSet<_> = IDEAS.iter().map(|idea| idea.title).collect();
        let images: HashSet<_> = IDEAS.iter().map(|idea| idea.image).collect();
        assert_eq!(titles.len(), 30);
        assert_eq!(images.len(), 30);
    }

    #[test]
    fn test_handles_follow_name() {
        let brave = IDEAS[3];
        assert_eq!(brave.title, TextRef("brave_title"));
        assert_eq!(brave.image, ImageRef("brave"));
        assert_eq!(brave.description, TextRef("brave_desc"));
        assert_eq!(brave.reference, TextRef("brave_ref"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.items().is_empty());
    }
}
