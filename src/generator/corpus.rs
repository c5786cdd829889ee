//! Theme-partitioned corpus: static definitions, compiled and validated once.
//!
//! # Organization
//! Templates are grouped into themes. Each theme carries its own word lists
//! and a template is only ever filled from the lists of its own theme, so a
//! nautical insult never picks up a git noun. Every template declares its
//! [`ArgumentShape`]; insults always use [`ArgumentShape::Noun`].
//!
//! # Validation
//! [`Corpus::from_defs`] rejects, before anything is served:
//! - a corpus without themes, or a theme without insults or comebacks
//! - a template whose `%s` count differs from its shape's arity
//! - a template containing a `%` outside a `%s` marker
//! - an empty word list that some template of the theme draws from

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::generator::shape::{ArgumentShape, WordClass};
use crate::generator::template::Template;
use crate::generator::themes::BUILTIN_THEMES;

/// Defects detected while building a corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("corpus has no themes")]
    NoThemes,

    #[error("theme '{theme}' has no {kind} templates")]
    NoTemplates { theme: &'static str, kind: TemplateKind },

    #[error(
        "theme '{theme}': {kind} template {template:?} has {found} placeholder(s) but shape {shape:?} needs {expected}"
    )]
    ShapeMismatch {
        theme: &'static str,
        kind: TemplateKind,
        template: &'static str,
        shape: ArgumentShape,
        expected: usize,
        found: usize,
    },

    #[error("theme '{theme}': {kind} template {template:?} contains a '%' that is not a %s placeholder")]
    StrayPercent {
        theme: &'static str,
        kind: TemplateKind,
        template: &'static str,
    },

    #[error("theme '{theme}': {class} list is empty but a template needs it")]
    EmptyWordList { theme: &'static str, class: WordClass },
}

/// Which half of an exchange a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Insult,
    Comeback,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::Insult => f.write_str("insult"),
            TemplateKind::Comeback => f.write_str("comeback"),
        }
    }
}

/// Word lists of one theme, one per [`WordClass`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordLists {
    pub nouns: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub gerunds: &'static [&'static str],
    pub past_verbs: &'static [&'static str],
}

impl WordLists {
    pub fn list(&self, class: WordClass) -> &'static [&'static str] {
        match class {
            WordClass::Noun => self.nouns,
            WordClass::Verb => self.verbs,
            WordClass::Gerund => self.gerunds,
            WordClass::PastVerb => self.past_verbs,
        }
    }
}

/// Source-level definition of a theme, as written in the static tables.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDef {
    pub name: &'static str,
    pub insults: &'static [&'static str],
    pub comebacks: &'static [(&'static str, ArgumentShape)],
    pub words: WordLists,
}

/// A validated theme.
#[derive(Debug, Clone)]
pub struct Theme {
    name: &'static str,
    insults: Vec<Template>,
    comebacks: Vec<Template>,
    words: WordLists,
}

impl Theme {
    fn compile(def: &ThemeDef) -> Result<Self, CorpusError> {
        let insults: Vec<Template> = def
            .insults
            .iter()
            .map(|&text| Template::parse(text, ArgumentShape::Noun))
            .collect();
        let comebacks: Vec<Template> = def
            .comebacks
            .iter()
            .map(|&(text, shape)| Template::parse(text, shape))
            .collect();

        if insults.is_empty() {
            return Err(CorpusError::NoTemplates {
                theme: def.name,
                kind: TemplateKind::Insult,
            });
        }
        if comebacks.is_empty() {
            return Err(CorpusError::NoTemplates {
                theme: def.name,
                kind: TemplateKind::Comeback,
            });
        }

        let mut needed = HashSet::new();
        for (kind, templates) in [
            (TemplateKind::Insult, &insults),
            (TemplateKind::Comeback, &comebacks),
        ] {
            for template in templates {
                check_template(def.name, kind, template)?;
                needed.extend(template.shape().classes().iter().copied());
            }
        }

        for class in [WordClass::Noun, WordClass::Verb, WordClass::Gerund, WordClass::PastVerb] {
            if needed.contains(&class) && def.words.list(class).is_empty() {
                return Err(CorpusError::EmptyWordList {
                    theme: def.name,
                    class,
                });
            }
        }

        Ok(Self {
            name: def.name,
            insults,
            comebacks,
            words: def.words,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn insults(&self) -> &[Template] {
        &self.insults
    }

    pub fn comebacks(&self) -> &[Template] {
        &self.comebacks
    }

    pub fn words(&self) -> &WordLists {
        &self.words
    }

    /// Draw one word per class of `shape`, independently and uniformly.
    ///
    /// Repeats are allowed when a shape names the same class twice.
    pub fn draw_words<R: Rng + ?Sized>(&self, shape: ArgumentShape, rng: &mut R) -> Vec<&'static str> {
        shape
            .classes()
            .iter()
            .filter_map(|class| self.words.list(*class).choose(rng).copied())
            .collect()
    }

    /// Draw words for `template` and render it.
    pub fn fill<R: Rng + ?Sized>(&self, template: &Template, rng: &mut R) -> String {
        let words = self.draw_words(template.shape(), rng);
        template.render(&words)
    }
}

fn check_template(
    theme: &'static str,
    kind: TemplateKind,
    template: &Template,
) -> Result<(), CorpusError> {
    let shape = template.shape();
    if template.has_stray_percent() {
        return Err(CorpusError::StrayPercent {
            theme,
            kind,
            template: template.text(),
        });
    }
    if template.placeholders() != shape.arity() {
        return Err(CorpusError::ShapeMismatch {
            theme,
            kind,
            template: template.text(),
            shape,
            expected: shape.arity(),
            found: template.placeholders(),
        });
    }
    Ok(())
}

/// The full, validated set of themes.
#[derive(Debug, Clone)]
pub struct Corpus {
    themes: Vec<Theme>,
}

impl Corpus {
    /// Compile and validate theme definitions.
    pub fn from_defs(defs: &[ThemeDef]) -> Result<Self, CorpusError> {
        if defs.is_empty() {
            return Err(CorpusError::NoThemes);
        }
        let themes = defs.iter().map(Theme::compile).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { themes })
    }

    /// The corpus compiled into the binary.
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_defs(BUILTIN_THEMES)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Total template count across all themes, insults and comebacks.
    pub fn template_count(&self) -> usize {
        self.themes
            .iter()
            .map(|t| t.insults.len() + t.comebacks.len())
            .sum()
    }
}
