//! Portfolio document model.
//!
//! The document is loaded once per page life and never mutated afterwards.
//! Every top-level section is wrapped in [`Section`] so one malformed field
//! only takes out its own section instead of the whole document.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

/// One top-level section of the portfolio document.
#[derive(Clone, Debug, PartialEq)]
pub enum Section<T> {
    /// The section parsed cleanly.
    Ready(T),
    /// The key was absent or `null`; the host page content stays as shipped.
    Missing,
    /// The key was present but did not match the expected shape.
    Malformed(String),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> Section<T> {
    /// Borrow the parsed value, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Missing | Self::Malformed(_) => None,
        }
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Section<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self::Missing);
        }
        Ok(match serde_json::from_value::<T>(value) {
            Ok(parsed) => Self::Ready(parsed),
            Err(e) => Self::Malformed(e.to_string()),
        })
    }
}

/// The whole portfolio document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioData {
    pub hero: Section<Hero>,
    pub about: Section<About>,
    pub skills: Section<Vec<SkillCategory>>,
    pub experience: Section<Vec<Job>>,
    pub projects: Section<Vec<Project>>,
    pub education: Section<Vec<Education>>,
    pub certifications: Section<Vec<String>>,
    pub contact: Section<Contact>,
}

impl PortfolioData {
    /// Loaded projects, or an empty slice when the section is not usable.
    #[must_use]
    pub fn project_list(&self) -> &[Project] {
        self.projects.ready().map_or(&[], Vec::as_slice)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub buttons: Vec<CallToAction>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Hero call-to-action link.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
    #[serde(default)]
    pub class: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<Skill>,
}

/// A named skill with a proficiency in percent (`0..=100`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "deserialize_percentage")]
    pub percentage: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Job {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// A portfolio project. `id` is the join key between cards and the modal.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub desc: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: Option<SocialLink>,
    pub socials: Vec<SocialLink>,
}

impl Contact {
    /// LinkedIn first, then the remaining social links in source order.
    pub fn social_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.linkedin.iter().chain(self.socials.iter())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub text: String,
    pub url: String,
}

/// Exact-match lookup of a project by id.
#[must_use]
pub fn find_project(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|p| p.id == id)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPercentage {
    Number(f64),
    Text(String),
}

fn deserialize_percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = match RawPercentage::deserialize(deserializer)? {
        RawPercentage::Number(n) => n,
        RawPercentage::Text(text) => {
            let trimmed = text.trim().trim_end_matches('%').trim_end();
            trimmed
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid percentage: {text:?}")))?
        }
    };
    if !value.is_finite() {
        return Err(serde::de::Error::custom("percentage must be finite"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = value.round().clamp(0.0, 100.0) as u8;
    Ok(clamped)
}
