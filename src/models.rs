use serde::{Deserialize, Deserializer, Serialize};

/// One vocabulary record: a headword and the words that mean the same thing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(alias = "hitza")]
    pub headword: String,
    #[serde(alias = "sinonimoak", default)]
    pub synonyms: Vec<String>,
    #[serde(alias = "isClass", default)]
    pub is_class_word: bool,
}

impl VocabEntry {
    pub fn new(id: impl Into<String>, headword: impl Into<String>, synonyms: &[&str]) -> Self {
        Self {
            id: id.into(),
            headword: headword.into(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            is_class_word: false,
        }
    }

    pub fn with_class_word(mut self, is_class_word: bool) -> Self {
        self.is_class_word = is_class_word;
        self
    }

    /// Case-insensitive identity of the entry within a pool.
    pub fn key(&self) -> String {
        self.headword.to_lowercase()
    }

    pub fn same_headword(&self, other: &str) -> bool {
        self.key() == other.to_lowercase()
    }
}

// Older exported lists used numeric ids (millisecond timestamps).
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// A candidate answer shown in a round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub target: VocabEntry,
    pub options: Vec<QuizOption>,
}

impl Round {
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }
}

/// Which restricted class list a class session practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassList {
    First,
    Second,
    All,
}

impl ClassList {
    pub fn label(&self) -> &'static str {
        match self {
            ClassList::First => "First list",
            ClassList::Second => "Second list",
            ClassList::All => "All class words",
        }
    }
}
