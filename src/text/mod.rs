// Text processing: normalization, compound protection, collocations.

pub mod compounds;
pub mod normalize;
pub mod phrases;
