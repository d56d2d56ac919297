//! Skill matching, scoring, gap analysis and critique

pub mod normalizer;
pub mod scorer;
pub mod gaps;
pub mod critique;
pub mod analyzer;
