// Sentiment scoring: domain lexicon, generic baseline, compound blend.

pub mod baseline;
pub mod lexicon;
pub mod scorer;
