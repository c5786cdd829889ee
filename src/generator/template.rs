//! Sentence templates with positional `%s` placeholders.

use crate::generator::shape::ArgumentShape;

/// Placeholder marker recognised inside template text.
pub const PLACEHOLDER: &str = "%s";

/// A template split into the literal pieces around its placeholders.
///
/// `pieces.len()` is always `placeholders + 1`, so rendering interleaves
/// `pieces[0] word[0] pieces[1] word[1] ... pieces[n]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
    shape: ArgumentShape,
    pieces: Vec<&'static str>,
}

impl Template {
    /// Split `text` on its placeholders. Does not check the shape; see
    /// [`Template::placeholders`] and corpus validation.
    pub fn parse(text: &'static str, shape: ArgumentShape) -> Self {
        Self {
            text,
            shape,
            pieces: text.split(PLACEHOLDER).collect(),
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn shape(&self) -> ArgumentShape {
        self.shape
    }

    /// Number of `%s` markers in the text.
    pub fn placeholders(&self) -> usize {
        self.pieces.len() - 1
    }

    /// True if a `%` appears that is not part of a `%s` marker.
    pub fn has_stray_percent(&self) -> bool {
        self.pieces.iter().any(|piece| piece.contains('%'))
    }

    /// Substitute `words` in order.
    ///
    /// The caller supplies exactly `placeholders()` words; the corpus
    /// guarantees this for every template it holds.
    pub fn render(&self, words: &[&str]) -> String {
        debug_assert_eq!(words.len(), self.placeholders(), "template {:?}", self.text);

        let capacity = self.text.len() + words.iter().map(|w| w.len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        let mut words = words.iter();
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                if let Some(word) = words.next() {
                    out.push_str(word);
                }
            }
            out.push_str(piece);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_placeholders() {
        let t = Template::parse("You code like a %s!", ArgumentShape::Noun);
        assert_eq!(t.placeholders(), 1);

        let t = Template::parse("Go %s your %s.", ArgumentShape::VerbNoun);
        assert_eq!(t.placeholders(), 2);

        let t = Template::parse("No markers at all.", ArgumentShape::Noun);
        assert_eq!(t.placeholders(), 0);
    }

    #[test]
    fn renders_in_order() {
        let t = Template::parse("Go %s your %s before lunch.", ArgumentShape::VerbNoun);
        assert_eq!(
            t.render(&["reboot", "house of cards"]),
            "Go reboot your house of cards before lunch."
        );
    }

    #[test]
    fn renders_placeholder_at_edges() {
        let t = Template::parse("%s and %s", ArgumentShape::NounGerund);
        assert_eq!(t.render(&["parrot", "sinking"]), "parrot and sinking");
    }

    #[test]
    fn detects_stray_percent() {
        assert!(Template::parse("100% a %s!", ArgumentShape::Noun).has_stray_percent());
        assert!(!Template::parse("A %s!", ArgumentShape::Noun).has_stray_percent());
    }
}
