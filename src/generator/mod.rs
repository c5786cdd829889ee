//! Message generation subsystem.
//!
//! # Data Flow
//! ```text
//! themes.rs (static ThemeDef tables)
//!     → corpus.rs (compile templates, validate shapes and word lists)
//!     → process-wide Corpus (OnceCell, initialized before serving)
//!     → engine.rs (theme → template → words → rendered text)
//!     → http / net handlers
//! ```
//!
//! # Design Decisions
//! - Corpus is validated eagerly by [`init`]; a defect aborts startup
//! - Every template declares its argument shape; nothing is inferred from text
//! - No shared RNG: free functions use the thread-local `thread_rng`,
//!   [`Generator`] methods take the caller's `Rng`

pub mod corpus;
pub mod engine;
pub mod shape;
pub mod template;
pub mod themes;

use once_cell::sync::OnceCell;

pub use corpus::{Corpus, CorpusError, Theme, ThemeDef, WordLists};
pub use engine::{Exchange, Generator, MessageKind};
pub use shape::{ArgumentShape, WordClass};
pub use template::{Template, PLACEHOLDER};

static CORPUS: OnceCell<Corpus> = OnceCell::new();

/// Build and validate the built-in corpus. Idempotent.
///
/// Call once during startup, before any listener is bound.
pub fn init() -> Result<&'static Corpus, CorpusError> {
    CORPUS.get_or_try_init(Corpus::builtin)
}

/// The process-wide corpus.
///
/// Falls back to lazy initialization when [`init`] was skipped; the built-in
/// tables are covered by tests, so the panic here marks a build defect.
pub fn corpus() -> &'static Corpus {
    CORPUS.get_or_init(|| match Corpus::builtin() {
        Ok(corpus) => corpus,
        Err(e) => panic!("built-in corpus is invalid: {e}"),
    })
}

/// Generator over the process-wide corpus.
pub fn global() -> Generator<'static> {
    Generator::new(corpus())
}

pub fn generate_insult() -> String {
    global().insult(&mut rand::thread_rng())
}

pub fn generate_comeback() -> String {
    global().comeback(&mut rand::thread_rng())
}

pub fn generate_message() -> String {
    global().message(&mut rand::thread_rng())
}

/// Like [`generate_message`], also reporting which half was drawn.
pub fn generate_message_with_kind() -> (MessageKind, String) {
    global().message_with_kind(&mut rand::thread_rng())
}

pub fn generate_exchange() -> Exchange {
    global().exchange(&mut rand::thread_rng())
}
