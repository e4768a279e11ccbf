use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{QuizOption, VocabEntry};
use crate::random::shuffled;

/// An attempt is correct when exactly the correct options were selected.
pub fn is_correct_selection(options: &[QuizOption], selected_ids: &[String]) -> bool {
    let correct: HashSet<&str> = options
        .iter()
        .filter(|o| o.is_correct)
        .map(|o| o.id.as_str())
        .collect();
    let selected: HashSet<&str> = selected_ids.iter().map(String::as_str).collect();
    correct == selected
}

/// Running totals for the stats view.
#[derive(Debug, Clone)]
pub struct Score {
    pub correct: u32,
    pub attempts: u32,
    pub started_at: DateTime<Utc>,
}

impl Score {
    pub fn new() -> Self {
        Self {
            correct: 0,
            attempts: 0,
            started_at: Utc::now(),
        }
    }

    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Rounded success rate; 0 before the first attempt.
    pub fn percentage(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        ((self.correct as f64 / self.attempts as f64) * 100.0).round() as u32
    }

    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.started_at
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

/// Works through every word of a class list once, in random order.
#[derive(Debug, Clone)]
pub struct ClassSession {
    words: Vec<VocabEntry>,
    queue: Vec<VocabEntry>,
    pub hits: u32,
    pub misses: u32,
}

impl ClassSession {
    pub fn new<R: Rng + ?Sized>(words: Vec<VocabEntry>, rng: &mut R) -> Self {
        let queue = shuffled(&words, rng);
        Self {
            words,
            queue,
            hits: 0,
            misses: 0,
        }
    }

    /// Takes the next word to quiz, or `None` when the session is over.
    pub fn next_word(&mut self) -> Option<VocabEntry> {
        self.queue.pop()
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn accuracy(&self) -> u32 {
        let answered = self.hits + self.misses;
        if answered == 0 {
            return 0;
        }
        ((self.hits as f64 / answered as f64) * 100.0).round() as u32
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.queue = shuffled(&self.words, rng);
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn option(id: &str, is_correct: bool) -> QuizOption {
        QuizOption {
            id: id.to_string(),
            text: id.to_string(),
            is_correct,
        }
    }

    #[test]
    fn test_selection_must_match_exactly() {
        let options = vec![option("a", true), option("b", true), option("c", false)];
        let pick = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert!(is_correct_selection(&options, &pick(&["b", "a"])));
        assert!(!is_correct_selection(&options, &pick(&["a"])));
        assert!(!is_correct_selection(&options, &pick(&["a", "b", "c"])));
        assert!(!is_correct_selection(&options, &pick(&[])));
    }

    #[test]
    fn test_no_correct_options_means_select_nothing() {
        let options = vec![option("a", false)];
        assert!(is_correct_selection(&options, &[]));
    }

    #[test]
    fn test_score_percentage() {
        let mut score = Score::new();
        assert_eq!(score.percentage(), 0);
        score.record(true);
        score.record(false);
        score.record(true);
        assert_eq!(score.attempts, 3);
        assert_eq!(score.correct, 2);
        assert_eq!(score.percentage(), 67);
    }

    #[test]
    fn test_class_session_visits_every_word_once() {
        let mut rng = StdRng::seed_from_u64(8);
        let words = vec![
            VocabEntry::new("1", "a", &["x"]),
            VocabEntry::new("2", "b", &["y"]),
            VocabEntry::new("3", "c", &["z"]),
        ];
        let mut session = ClassSession::new(words, &mut rng);
        assert_eq!(session.total(), 3);

        let mut seen = Vec::new();
        while let Some(word) = session.next_word() {
            seen.push(word.headword);
            session.record(seen.len() != 2);
        }
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c"]);
        assert!(session.is_finished());
        assert_eq!((session.hits, session.misses), (2, 1));
        assert_eq!(session.accuracy(), 67);

        session.restart(&mut rng);
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.hits, 0);
    }
}
