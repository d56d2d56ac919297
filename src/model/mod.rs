//! Domain records shared by every analysis component

pub mod job;
pub mod resume;

pub use job::JobPosting;
pub use resume::{Education, EndDate, Experience, Resume, Skill};
