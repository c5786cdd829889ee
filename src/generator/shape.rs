//! Argument shapes: which word classes a template consumes, and in which order.

use std::fmt;

/// A class of word that can fill a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// "rubber duck", "merge conflict"
    Noun,
    /// Bare infinitive: "exit vim", "blame the user"
    Verb,
    /// "-ing" form: "rebasing", "testing in production"
    Gerund,
    /// Simple past: "refactored", "inherited"
    PastVerb,
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
            WordClass::Gerund => "gerund",
            WordClass::PastVerb => "past-verb",
        };
        f.write_str(name)
    }
}

/// The ordered sequence of word classes a template expects.
///
/// Declared explicitly on every template. The placeholder count of the
/// template text must equal [`ArgumentShape::arity`]; this is checked when
/// the corpus is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentShape {
    Noun,
    Verb,
    Gerund,
    VerbNoun,
    GerundNoun,
    PastVerbNoun,
    NounVerb,
    NounGerund,
}

impl ArgumentShape {
    /// Word classes in substitution order.
    pub fn classes(self) -> &'static [WordClass] {
        use WordClass::*;
        match self {
            ArgumentShape::Noun => &[Noun],
            ArgumentShape::Verb => &[Verb],
            ArgumentShape::Gerund => &[Gerund],
            ArgumentShape::VerbNoun => &[Verb, Noun],
            ArgumentShape::GerundNoun => &[Gerund, Noun],
            ArgumentShape::PastVerbNoun => &[PastVerb, Noun],
            ArgumentShape::NounVerb => &[Noun, Verb],
            ArgumentShape::NounGerund => &[Noun, Gerund],
        }
    }

    /// Number of words this shape consumes.
    pub fn arity(self) -> usize {
        self.classes().len()
    }
}
