//! Testimonials shown in the carousel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Attribution line, e.g. "CTO, Innovation Labs".
    pub fn attribution(&self) -> String {
        match &self.company {
            Some(company) => format!("{}, {}", self.role, company),
            None => self.role.clone(),
        }
    }
}
