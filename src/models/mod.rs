//! Content models for the portfolio site.

mod experience;
mod project;
mod skill;
mod testimonial;

pub use experience::Experience;
pub use project::{Project, ProjectLinks};
pub use skill::{Skill, SkillLevel};
pub use testimonial::Testimonial;
