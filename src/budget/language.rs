use std::fmt::{Display, Formatter};

/// Words per second assumed for a language missing from the table.
pub const DEFAULT_WORDS_PER_SECOND: f64 = 2.5;

pub const DEFAULT_LANGUAGE: Language = Language::English;

/// Approximate natural speaking speed by language, in words per second.
static SPEAKING_RATES: [(Language, f64); 21] = [
    (Language::English, 2.7),
    (Language::Hindi, 2.4),
    (Language::Bengali, 2.4),
    (Language::Marathi, 2.4),
    (Language::Tamil, 2.3),
    (Language::Telugu, 2.3),
    (Language::Gujarati, 2.3),
    (Language::Kannada, 2.3),
    (Language::Malayalam, 2.2),
    (Language::Punjabi, 2.4),
    (Language::Odia, 2.3),
    (Language::Assamese, 2.3),
    (Language::Nepali, 2.3),
    (Language::Urdu, 2.4),
    (Language::Sindhi, 2.3),
    (Language::Bodo, 2.2),
    (Language::Manipuri, 2.2),
    (Language::Sanskrit, 2.1),
    (Language::Gurmukhi, 2.4),
    (Language::Konkani, 2.3),
    (Language::Marwari, 2.3),
];

/// Script output language.
///
/// Recognition is an exact, case-sensitive match on the English language
/// name. Anything else is kept verbatim in `Other` so the model still gets
/// asked for that language; it just uses the default speaking rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Marathi,
    Tamil,
    Telugu,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Odia,
    Assamese,
    Nepali,
    Urdu,
    Sindhi,
    Bodo,
    Manipuri,
    Sanskrit,
    Gurmukhi,
    Konkani,
    Marwari,
    Other(String),
}

impl Language {
    pub fn from_name(name: &str) -> Self {
        SPEAKING_RATES
            .iter()
            .map(|(language, _)| language)
            .find(|language| language.name() == name)
            .cloned()
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Marathi => "Marathi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Gujarati => "Gujarati",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Punjabi => "Punjabi",
            Self::Odia => "Odia",
            Self::Assamese => "Assamese",
            Self::Nepali => "Nepali",
            Self::Urdu => "Urdu",
            Self::Sindhi => "Sindhi",
            Self::Bodo => "Bodo",
            Self::Manipuri => "Manipuri",
            Self::Sanskrit => "Sanskrit",
            Self::Gurmukhi => "Gurmukhi",
            Self::Konkani => "Konkani",
            Self::Marwari => "Marwari",
            Self::Other(name) => name,
        }
    }

    pub fn words_per_second(&self) -> f64 {
        SPEAKING_RATES
            .iter()
            .find(|(language, _)| language == self)
            .map(|(_, rate)| *rate)
            .unwrap_or(DEFAULT_WORDS_PER_SECOND)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Every language with a dedicated speaking rate.
    pub fn recognized() -> impl Iterator<Item = &'static Language> {
        SPEAKING_RATES.iter().map(|(language, _)| language)
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
