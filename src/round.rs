//! Round generation: pick a target word, collect its synonyms as the correct
//! answers and pad the option list with distractors drawn from other entries.

use std::collections::HashSet;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::RoundError;
use crate::models::{QuizOption, Round, VocabEntry};
use crate::random::{option_token, pick, shuffled};

pub const MAX_OPTIONS: usize = 8;
pub const MIN_DISTRACTORS: usize = 4;
/// Upper bound on sampling attempts; a sparse source may ship fewer distractors.
pub const MAX_ATTEMPTS: usize = 200;

/// Builds one quiz round.
///
/// `pinned` bypasses random target selection. `distractor_source` defaults to
/// `pool` and is used when the pool is a small subset (e.g. a class list).
pub fn generate_round<R>(
    pool: &[VocabEntry],
    pinned: Option<&VocabEntry>,
    distractor_source: Option<&[VocabEntry]>,
    rng: &mut R,
) -> Result<Round, RoundError>
where
    R: Rng + ?Sized,
{
    let target = match pinned {
        Some(entry) => entry,
        None => pick(pool, rng).map_err(RoundError::EmptyPool)?,
    };

    // Authored lists occasionally repeat a synonym; keep the first occurrence.
    let mut seen = HashSet::new();
    let correct: Vec<&str> = target
        .synonyms
        .iter()
        .map(String::as_str)
        .filter(|s| seen.insert(*s))
        .collect();

    let needed = MIN_DISTRACTORS.max(MAX_OPTIONS.saturating_sub(correct.len()));
    let source = distractor_source.unwrap_or(pool);
    let (distractors, attempts) = sample_distractors(target, &correct, source, needed, rng);

    if distractors.len() < needed {
        warn!(
            "Only found {}/{} distractors for '{}' after {} attempts",
            distractors.len(),
            needed,
            target.headword,
            attempts
        );
    }

    let mut ids = HashSet::new();
    let mut options = Vec::with_capacity(correct.len() + distractors.len());
    for (text, is_correct) in correct
        .iter()
        .map(|t| (*t, true))
        .chain(distractors.iter().map(|t| (*t, false)))
    {
        let id = fresh_id(&mut ids, rng);
        options.push(QuizOption {
            id,
            text: text.to_string(),
            is_correct,
        });
    }

    // Shuffle before capping so truncation drops options without bias.
    let mut options = shuffled(&options, rng);
    options.truncate(MAX_OPTIONS);

    debug!(
        "Round for '{}': {} correct, {} distractors, {} options kept",
        target.headword,
        correct.len(),
        distractors.len(),
        options.len()
    );

    Ok(Round {
        target: target.clone(),
        options,
    })
}

fn sample_distractors<'a, R>(
    target: &VocabEntry,
    correct: &[&str],
    source: &'a [VocabEntry],
    needed: usize,
    rng: &mut R,
) -> (Vec<&'a str>, usize)
where
    R: Rng + ?Sized,
{
    let target_key = target.key();
    let mut accepted: Vec<&'a str> = Vec::with_capacity(needed);
    let mut attempts = 0;

    while accepted.len() < needed && attempts < MAX_ATTEMPTS {
        attempts += 1;

        let entry = match pick(source, rng) {
            Ok(entry) => entry,
            Err(_) => break,
        };
        if entry.key() == target_key {
            continue;
        }

        let candidate = if rng.gen_bool(0.5) {
            entry.headword.as_str()
        } else {
            pick(&entry.synonyms, rng)
                .map(String::as_str)
                .unwrap_or(entry.headword.as_str())
        };

        if candidate.trim().is_empty()
            || target.same_headword(candidate)
            || correct.contains(&candidate)
            || accepted.contains(&candidate)
        {
            continue;
        }
        accepted.push(candidate);
    }

    (accepted, attempts)
}

fn fresh_id<R>(taken: &mut HashSet<String>, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    loop {
        let id = option_token(rng);
        if taken.insert(id.clone()) {
            return id;
        }
    }
}

/// Owns a random source so callers can ask for rounds without threading an RNG.
pub struct RoundGenerator {
    rng: Box<dyn RngCore>,
}

impl RoundGenerator {
    pub fn new() -> Self {
        Self {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Reproducible rounds, for tests and the `SYNONYM_QUIZ_SEED` setting.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn next_round(
        &mut self,
        pool: &[VocabEntry],
        pinned: Option<&VocabEntry>,
        distractor_source: Option<&[VocabEntry]>,
    ) -> Result<Round, RoundError> {
        generate_round(pool, pinned, distractor_source, &mut *self.rng)
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self::new()
    }
}
