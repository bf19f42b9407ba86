// arXiv API integration: Atom client and paginated collection.

pub mod client;
pub mod papers;
