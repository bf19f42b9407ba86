// Gallium: Scientific sentiment and topic analysis for arXiv abstracts
//
// This is the library root. Each module corresponds to a major stage
// of the analysis pipeline.

pub mod arxiv;
pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod status;
pub mod text;
pub mod topics;
