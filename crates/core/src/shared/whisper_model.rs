/// Whisper ggml checkpoint tiers, ordered by size.
///
/// Base is the default accuracy/speed compromise for CPU inference; Tiny
/// trades accuracy for speed, Small the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhisperModel {
    Tiny,
    #[default]
    Base,
    Small,
}

impl WhisperModel {
    pub const ALL: &[WhisperModel] = &[WhisperModel::Tiny, WhisperModel::Base, WhisperModel::Small];

    pub fn file_name(self) -> &'static str {
        match self {
            WhisperModel::Tiny => "ggml-tiny.bin",
            WhisperModel::Base => "ggml-base.bin",
            WhisperModel::Small => "ggml-small.bin",
        }
    }

    pub fn download_url(self) -> String {
        format!(
            "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/{}",
            self.file_name()
        )
    }
}

impl std::fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WhisperModel::Tiny => write!(f, "Tiny (fastest)"),
            WhisperModel::Base => write!(f, "Base"),
            WhisperModel::Small => write!(f, "Small (most accurate)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WhisperModel::Tiny, "ggml-tiny.bin")]
    #[case(WhisperModel::Base, "ggml-base.bin")]
    #[case(WhisperModel::Small, "ggml-small.bin")]
    fn test_file_names(#[case] model: WhisperModel, #[case] expected: &str) {
        assert_eq!(model.file_name(), expected);
        assert!(model.download_url().ends_with(expected));
    }

    #[test]
    fn test_default_tier_is_base() {
        assert_eq!(WhisperModel::default(), WhisperModel::Base);
    }
}
