pub mod generators;
pub mod training;
