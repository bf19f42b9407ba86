// Data models: Rust structs that map to corpus and analysis rows.
//
// These are the types that flow through the pipeline. They're separate
// from the CSV store so other modules can use them without touching I/O.

use serde::{Deserialize, Serialize};

/// One paper collected from the arXiv API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// arXiv entry id (a URL, unique per paper version)
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Publication date as YYYY-MM-DD (falls back to the updated date)
    pub published: String,
    /// arXiv category terms, semicolon-joined in the CSV
    #[serde(with = "semicolon_list")]
    pub categories: Vec<String>,
}

/// One fully analyzed paper: the corpus row plus everything the
/// pipeline derives from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub published: String,
    #[serde(with = "semicolon_list")]
    pub categories: Vec<String>,
    /// Normalized abstract, compounds restored (the topic-model input)
    pub processed_abstract: String,
    pub base_sentiment: f64,
    pub technical_confidence: f64,
    pub result_strength: f64,
    pub citation_impact: f64,
    pub compound: f64,
    pub sentiment_category: String,
    /// Index of the dominant LDA topic
    pub topic_index: usize,
    pub topic_name: String,
}

/// Sentiment bands derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentCategory {
    StrongNegative,
    ModerateNegative,
    Neutral,
    ModeratePositive,
    StrongPositive,
}

impl SentimentCategory {
    /// Determine the band from the compound score and the technical
    /// confidence. The confidence sign must agree with the band: a high
    /// compound driven purely by result strength stays Neutral.
    pub fn from_scores(compound: f64, technical_confidence: f64) -> Self {
        if compound >= 0.3 && technical_confidence > 0.0 {
            SentimentCategory::StrongPositive
        } else if compound >= 0.1 && technical_confidence > 0.0 {
            SentimentCategory::ModeratePositive
        } else if compound <= -0.3 && technical_confidence < 0.0 {
            SentimentCategory::StrongNegative
        } else if compound <= -0.1 && technical_confidence < 0.0 {
            SentimentCategory::ModerateNegative
        } else {
            SentimentCategory::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::StrongNegative => "Strong Negative",
            SentimentCategory::ModerateNegative => "Moderate Negative",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::ModeratePositive => "Moderate Positive",
            SentimentCategory::StrongPositive => "Strong Positive",
        }
    }

    /// All bands from most negative to most positive, for ordered display.
    pub fn ordered() -> [SentimentCategory; 5] {
        [
            SentimentCategory::StrongNegative,
            SentimentCategory::ModerateNegative,
            SentimentCategory::Neutral,
            SentimentCategory::ModeratePositive,
            SentimentCategory::StrongPositive,
        ]
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// -- Serde helper for flat CSV fields --

/// Serializes a Vec<String> as one "a; b; c" cell so the models stay
/// flat enough for the csv crate.
mod semicolon_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&items.join("; "))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let joined = String::deserialize(deserializer)?;
        Ok(joined
            .split(';')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect())
    }
}
