/// Plain transcript text produced by a speech recognizer.
///
/// The text is whole-run output with no time alignment; callers replace any
/// previously displayed transcript wholesale rather than appending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Assemble a transcript from per-segment strings.
    ///
    /// Segments come back from the model with ragged leading/trailing
    /// whitespace; each is trimmed and the non-empty ones joined with a
    /// single space.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = segments
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments_trims_and_joins() {
        let t = Transcript::from_segments([" Hello there.", "  General Kenobi. "]);
        assert_eq!(t.text(), "Hello there. General Kenobi.");
    }

    #[test]
    fn test_from_segments_skips_blank_segments() {
        let t = Transcript::from_segments(["one", "   ", "", "two"]);
        assert_eq!(t.text(), "one two");
    }

    #[test]
    fn test_word_count() {
        let t = Transcript::new("the quick brown fox");
        assert_eq!(t.word_count(), 4);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_empty_transcript() {
        let t = Transcript::from_segments::<_, &str>([]);
        assert!(t.is_empty());
        assert_eq!(t.word_count(), 0);
    }
}
