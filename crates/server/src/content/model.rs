//! Landing page document model.
//!
//! Section bodies are opaque JSON. The server only knows the six top-level
//! keys; whatever the admin client puts under them is stored and served back
//! verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The full landing page document persisted in `content.json`.
///
/// A stored document missing one of the six sections gets that section from
/// the defaults. Unknown top-level keys are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hero: Value,
    pub sections: Value,
    pub cta: Value,
    pub about: Value,
    pub services: Value,
    pub channels: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SiteContent {
    fn default() -> Self {
        super::defaults::default_content()
    }
}

/// A top-level field of [`SiteContent`] that the admin replaces wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Sections,
    Cta,
    About,
    Services,
    Channels,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Sections,
        Section::Cta,
        Section::About,
        Section::Services,
        Section::Channels,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Sections => "sections",
            Section::Cta => "cta",
            Section::About => "about",
            Section::Services => "services",
            Section::Channels => "channels",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl SiteContent {
    /// Replace one top-level field with `body`, leaving the rest untouched.
    /// Any JSON value is accepted.
    pub fn replace(&mut self, section: Section, body: Value) {
        let slot = match section {
            Section::Hero => &mut self.hero,
            Section::Sections => &mut self.sections,
            Section::Cta => &mut self.cta,
            Section::About => &mut self.about,
            Section::Services => &mut self.services,
            Section::Channels => &mut self.channels,
        };
        *slot = body;
    }
}

/// `GET /data` body: the document plus the computed `hasAvatar` flag.
#[derive(Debug, Serialize)]
pub struct SiteData {
    #[serde(flatten)]
    pub content: SiteContent,
    #[serde(rename = "hasAvatar")]
    pub has_avatar: bool,
}
