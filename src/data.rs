use crate::models::VocabEntry;

pub struct BundledEntry {
    pub headword: &'static str,
    pub synonyms: &'static [&'static str],
}

pub const BUNDLED_DATA: &[BundledEntry] = &[
    BundledEntry { headword: "big", synonyms: &["large", "huge", "enormous"] },
    BundledEntry { headword: "small", synonyms: &["little", "tiny", "minute"] },
    BundledEntry { headword: "happy", synonyms: &["glad", "cheerful", "joyful"] },
    BundledEntry { headword: "sad", synonyms: &["unhappy", "sorrowful", "gloomy"] },
    BundledEntry { headword: "fast", synonyms: &["quick", "rapid", "swift"] },
    BundledEntry { headword: "slow", synonyms: &["sluggish", "unhurried"] },
    BundledEntry { headword: "begin", synonyms: &["start", "commence", "initiate"] },
    BundledEntry { headword: "end", synonyms: &["finish", "conclude", "terminate"] },
    BundledEntry { headword: "brave", synonyms: &["courageous", "bold", "fearless"] },
    BundledEntry { headword: "angry", synonyms: &["furious", "irate", "cross"] },
    BundledEntry { headword: "smart", synonyms: &["clever", "intelligent", "bright"] },
    BundledEntry { headword: "difficult", synonyms: &["hard", "tough", "demanding"] },
    BundledEntry { headword: "easy", synonyms: &["simple", "effortless"] },
    BundledEntry { headword: "beautiful", synonyms: &["pretty", "lovely", "attractive"] },
    BundledEntry { headword: "old", synonyms: &["ancient", "aged", "elderly"] },
    BundledEntry { headword: "rich", synonyms: &["wealthy", "affluent", "prosperous"] },
    BundledEntry { headword: "poor", synonyms: &["needy", "impoverished"] },
    BundledEntry { headword: "quiet", synonyms: &["silent", "hushed", "soundless"] },
    BundledEntry { headword: "loud", synonyms: &["noisy", "deafening", "booming"] },
    BundledEntry { headword: "cold", synonyms: &["chilly", "freezing", "frosty"] },
    BundledEntry { headword: "hot", synonyms: &["warm", "scorching", "boiling"] },
    BundledEntry { headword: "strange", synonyms: &["odd", "peculiar", "weird"] },
];

pub const BUNDLED_CLASS_FIRST: &[BundledEntry] = &[
    BundledEntry { headword: "abandon", synonyms: &["desert", "forsake", "leave"] },
    BundledEntry { headword: "candid", synonyms: &["frank", "honest", "open"] },
    BundledEntry { headword: "diligent", synonyms: &["hardworking", "industrious"] },
    BundledEntry { headword: "eager", synonyms: &["keen", "enthusiastic"] },
];

pub const BUNDLED_CLASS_SECOND: &[BundledEntry] = &[
    BundledEntry { headword: "feeble", synonyms: &["weak", "frail"] },
    BundledEntry { headword: "hostile", synonyms: &["unfriendly", "antagonistic"] },
    BundledEntry { headword: "meager", synonyms: &["scanty", "sparse", "paltry"] },
    BundledEntry { headword: "vivid", synonyms: &["striking", "intense", "graphic"] },
];

pub fn to_entries(prefix: &str, data: &[BundledEntry]) -> Vec<VocabEntry> {
    data.iter()
        .enumerate()
        .map(|(i, b)| VocabEntry::new(format!("{}-{}", prefix, i), b.headword, b.synonyms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_headwords_are_unique() {
        let all = [BUNDLED_DATA, BUNDLED_CLASS_FIRST, BUNDLED_CLASS_SECOND];
        let mut seen = HashSet::new();
        for list in all {
            for entry in list {
                assert!(seen.insert(entry.headword.to_lowercase()), "duplicate {}", entry.headword);
                assert!(!entry.synonyms.is_empty());
            }
        }
    }

    #[test]
    fn test_to_entries_assigns_ids() {
        let entries = to_entries("core", BUNDLED_DATA);
        assert_eq!(entries.len(), BUNDLED_DATA.len());
        assert_eq!(entries[0].id, "core-0");
    }
}
