//! Lexicon implementations shipped with the core crate.

mod memory;

pub use memory::InMemoryLexicon;
