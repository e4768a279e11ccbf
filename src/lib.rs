//! Synonym practice quiz: a learner is shown a word and picks every synonym
//! out of a shuffled set of candidates.
//!
//! The core is [`round::generate_round`]; the rest of the crate loads and
//! edits vocabulary and drives a terminal front-end.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod random;
pub mod round;
pub mod session;
pub mod storage;
pub mod tui;
pub mod ui;
pub mod vocab;

pub use error::{EmptySequenceError, RoundError, StoreError};
pub use models::{ClassList, QuizOption, Round, VocabEntry};
pub use round::{generate_round, RoundGenerator};
pub use vocab::{merge_layers, VocabStore};
