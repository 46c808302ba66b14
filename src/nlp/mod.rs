//! Text ingestion: cleaning source text into graph words.

pub mod tokenizer;

pub use tokenizer::{normalize_word, Tokenizer};
