// Pipeline orchestration: the analysis stages wired together.

pub mod analyze;
