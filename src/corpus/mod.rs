// Corpus persistence: flat-file storage for papers and analysis rows.

pub mod models;
pub mod store;
