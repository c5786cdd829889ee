//! Sampling: maps an entropy source to insults, comebacks and exchanges.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::corpus::{Corpus, Theme};

/// A matched insult/comeback pair drawn from one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub insult: String,
    pub comeback: String,
}

/// Which half a single message was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Insult,
    Comeback,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Insult => "insult",
            MessageKind::Comeback => "comeback",
        }
    }
}

/// Stateless view over a validated corpus.
///
/// Holds no entropy of its own: every call takes the caller's `Rng`, so
/// concurrent callers never share a generator state.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    corpus: &'a Corpus,
}

impl<'a> Generator<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Pick a theme uniformly.
    pub fn theme<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a Theme {
        self.corpus
            .themes()
            .choose(rng)
            .unwrap_or_else(|| unreachable!("validated corpus has at least one theme"))
    }

    pub fn insult<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let theme = self.theme(rng);
        Self::insult_from(theme, rng)
    }

    pub fn comeback<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let theme = self.theme(rng);
        Self::comeback_from(theme, rng)
    }

    /// Fair coin between [`Generator::insult`] and [`Generator::comeback`].
    pub fn message<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.message_with_kind(rng).1
    }

    pub fn message_with_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> (MessageKind, String) {
        if rng.gen_bool(0.5) {
            (MessageKind::Insult, self.insult(rng))
        } else {
            (MessageKind::Comeback, self.comeback(rng))
        }
    }

    /// Insult and comeback from the same theme; words drawn independently.
    pub fn exchange<R: Rng + ?Sized>(&self, rng: &mut R) -> Exchange {
        let theme = self.theme(rng);
        Exchange {
            insult: Self::insult_from(theme, rng),
            comeback: Self::comeback_from(theme, rng),
        }
    }

    fn insult_from<R: Rng + ?Sized>(theme: &Theme, rng: &mut R) -> String {
        match theme.insults().choose(rng) {
            Some(template) => theme.fill(template, rng),
            None => unreachable!("validated theme has insult templates"),
        }
    }

    fn comeback_from<R: Rng + ?Sized>(theme: &Theme, rng: &mut R) -> String {
        match theme.comebacks().choose(rng) {
            Some(template) => theme.fill(template, rng),
            None => unreachable!("validated theme has comeback templates"),
        }
    }
}
