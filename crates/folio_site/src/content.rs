//! Static portfolio content.
//!
//! Projects, skills, principles, contact links and impact metrics ship inside
//! the binary as a TOML document. It is parsed and validated once at startup;
//! nothing mutates it afterwards.

use std::collections::HashSet;

use folio_ui::Color;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// The content document compiled into the crate.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.toml");

/// Highest value an impact metric may carry (percent).
pub const METRIC_MAX: u8 = 100;

/// A case study.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// URL slug, unique across projects.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role held on the project.
    pub role: String,
    /// Year or "Ongoing".
    pub year: String,
    /// Card tags.
    pub tags: Vec<String>,
    /// One-paragraph summary.
    pub description: String,
    /// How the work was approached.
    pub approach: String,
    /// What it achieved.
    pub impact: String,
    /// Tools and technologies.
    pub tech: Vec<String>,
    /// Card gradient, start and end as CSS hex colors.
    pub gradient: [String; 2],
}

impl Project {
    /// Parsed gradient stops. Validated content always yields `Some`.
    #[must_use]
    pub fn gradient_colors(&self) -> Option<(Color, Color)> {
        let [from, to] = &self.gradient;
        Some((Color::parse_hex(from)?, Color::parse_hex(to)?))
    }
}

/// A skill group on the About page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    /// Icon name.
    pub icon: String,
    /// Group title.
    pub title: String,
    /// Skills in the group.
    pub items: Vec<String>,
}

/// A working principle on the About page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Principle {
    /// Icon name.
    pub icon: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub text: String,
}

/// A contact channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactLink {
    /// Icon name.
    pub icon: String,
    /// Channel name.
    pub title: String,
    /// Secondary line.
    pub text: String,
    /// Link target.
    pub href: String,
}

impl ContactLink {
    /// External links open in a new tab.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// One row of the impact table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactMetric {
    /// Metric name.
    pub label: String,
    /// Value, 0 to 100.
    pub value: u8,
    /// Unit shown after the value.
    pub suffix: String,
    /// Accent color as CSS hex.
    pub color: String,
}

impl ImpactMetric {
    /// Parsed accent color.
    #[must_use]
    pub fn accent(&self) -> Option<Color> {
        Color::parse_hex(&self.color)
    }
}

/// Every content table of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Case studies, in display order.
    pub projects: Vec<Project>,
    /// Skill groups.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Working principles.
    #[serde(default)]
    pub principles: Vec<Principle>,
    /// Contact channels.
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    /// Impact table shown in the showcase.
    #[serde(default)]
    pub metrics: Vec<ImpactMetric>,
}

impl Portfolio {
    /// Parses and validates the embedded document.
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in document is broken.
    pub fn embedded() -> SiteResult<Self> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Parses and validates a content document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ContentParse`] for malformed TOML and
    /// [`SiteError::InvalidContent`] when a table rule is broken.
    pub fn from_toml_str(source: &str) -> SiteResult<Self> {
        let portfolio: Self =
            toml::from_str(source).map_err(|e| SiteError::ContentParse(e.to_string()))?;
        portfolio.validate()?;
        tracing::debug!(
            projects = portfolio.projects.len(),
            skills = portfolio.skills.len(),
            "content loaded"
        );
        Ok(portfolio)
    }

    /// Checks the table rules.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidContent`] naming the first broken rule.
    pub fn validate(&self) -> SiteResult<()> {
        if self.projects.is_empty() {
            return Err(SiteError::InvalidContent("no projects".into()));
        }

        let mut seen = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if project.id.is_empty() || project.id.contains('/') {
                return Err(SiteError::InvalidContent(format!(
                    "project id {:?} is not a valid slug",
                    project.id
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(SiteError::InvalidContent(format!(
                    "duplicate project id {:?}",
                    project.id
                )));
            }
            if project.gradient_colors().is_none() {
                return Err(SiteError::InvalidContent(format!(
                    "project {:?} has a bad gradient",
                    project.id
                )));
            }
        }

        for metric in &self.metrics {
            if metric.value > METRIC_MAX {
                return Err(SiteError::InvalidContent(format!(
                    "metric {:?} is {} (max {METRIC_MAX})",
                    metric.label, metric.value
                )));
            }
            if metric.accent().is_none() {
                return Err(SiteError::InvalidContent(format!(
                    "metric {:?} has a bad color",
                    metric.label
                )));
            }
        }

        Ok(())
    }

    /// Looks up a project by slug.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
