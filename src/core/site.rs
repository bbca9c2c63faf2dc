//! # Site Content
//!
//! The static document the UI runs against: pages, navigation links,
//! carousel slides, publications and the initiative table. Content is TOML,
//! either a user-supplied file or the bundled default site.
//!
//! ```text
//! SiteContent
//! ├── site: SiteMeta                      // name + tagline for the nav bar
//! ├── pages: Vec<PageSpec>                // id == fragment key
//! │   └── anchors: Vec<AnchorSpec>        // in-page scroll targets
//! ├── nav: Vec<NavLinkSpec>               // href is "#fragment"
//! ├── carousel: CarouselSpec              // slides + indicator count
//! ├── publications: Vec<PublicationSpec>
//! └── initiatives: BTreeMap<key, InitiativeRecord>
//! ```
//!
//! Nothing here holds UI state. The router, carousel and friends build their
//! own state from these specs at startup.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use pulldown_cmark::{Event, Parser, Tag};
use serde::Deserialize;
use thiserror::Error;

use crate::core::initiatives::InitiativeRecord;

const BUNDLED_SITE: &str = include_str!("../../content/site.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate page id '{0}'")]
    DuplicatePage(String),
    #[error("page id must not be empty")]
    EmptyPageId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

/// Interactive widgets a page can host below its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFeature {
    Carousel,
    Publications,
    ContactForm,
    Initiatives,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSpec {
    pub id: String,
    pub title: String,
    /// Markdown. Links with a `#fragment` destination are navigable.
    #[serde(default)]
    pub body: String,
    /// Initial "active" marker. The first marked page wins.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub features: Vec<PageFeature>,
    #[serde(default)]
    pub anchors: Vec<AnchorSpec>,
}

impl PageSpec {
    pub fn has_feature(&self, feature: PageFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Fragment links in the body, in document order.
    pub fn links(&self) -> Vec<LinkRef> {
        fragment_links(&self.body)
    }
}

/// A named scroll target inside a page, `offset` rows below the page top.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnchorSpec {
    pub id: String,
    pub offset: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLinkSpec {
    pub label: String,
    pub href: String,
    /// Enclosing dropdown, if the link lives in a submenu.
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarouselSpec {
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
    /// Defaults to one indicator per slide.
    #[serde(default)]
    pub indicators: Option<usize>,
}

impl CarouselSpec {
    pub fn indicator_count(&self) -> usize {
        self.indicators.unwrap_or(self.slides.len())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideSpec {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublicationSpec {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub summary: String,
}

/// A link found in markdown content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub pages: Vec<PageSpec>,
    #[serde(default)]
    pub nav: Vec<NavLinkSpec>,
    #[serde(default)]
    pub carousel: CarouselSpec,
    #[serde(default)]
    pub publications: Vec<PublicationSpec>,
    #[serde(default)]
    pub initiatives: BTreeMap<String, InitiativeRecord>,
}

impl SiteContent {
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        debug!(
            "Parsed site content: {} pages, {} nav links, {} slides, {} publications, {} initiatives",
            content.pages.len(),
            content.nav.len(),
            content.carousel.slides.len(),
            content.publications.len(),
            content.initiatives.len()
        );
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&source)?;
        info!("Loaded site content from {}", path.display());
        Ok(content)
    }

    /// The default site compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_toml_str(BUNDLED_SITE)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.id.is_empty() {
                return Err(ContentError::EmptyPageId);
            }
            if !seen.insert(page.id.as_str()) {
                return Err(ContentError::DuplicatePage(page.id.clone()));
            }
        }
        Ok(())
    }

    pub fn page(&self, id: &str) -> Option<&PageSpec> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// The page hosting a given widget, if any.
    pub fn feature_page(&self, feature: PageFeature) -> Option<&PageSpec> {
        self.pages.iter().find(|p| p.has_feature(feature))
    }
}

/// Collects `[label](#fragment)` links from markdown.
pub fn fragment_links(markdown: &str) -> Vec<LinkRef> {
    let mut links = Vec::new();
    let mut open: Option<LinkRef> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) => {
                open = Some(LinkRef {
                    label: String::new(),
                    href: dest_url.to_string(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(link) = open.as_mut() {
                    link.label.push_str(&text);
                }
            }
            Event::End(pulldown_cmark::TagEnd::Link) => {
                if let Some(link) = open.take()
                    && link.href.starts_with('#')
                {
                    links.push(link);
                }
            }
            _ => {}
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_site_parses() {
        let content = SiteContent::bundled().unwrap();
        assert!(content.page("home").is_some());
        assert!(content.page("initiatives").is_some());
        assert!(!content.carousel.slides.is_empty());
        assert!(content.initiatives.contains_key("foundation"));
    }

    #[test]
    fn duplicate_page_ids_are_rejected() {
        let toml_str = r#"
[[pages]]
id = "home"
title = "Home"

[[pages]]
id = "home"
title = "Home again"
"#;
        let err = SiteContent::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ContentError::DuplicatePage(id) if id == "home"));
    }

    #[test]
    fn sparse_content_parses() {
        let content = SiteContent::from_toml_str(
            r#"
[[pages]]
id = "home"
title = "Home"
"#,
        )
        .unwrap();
        assert_eq!(content.pages.len(), 1);
        assert!(content.nav.is_empty());
        assert!(content.carousel.slides.is_empty());
        assert_eq!(content.carousel.indicator_count(), 0);
    }

    #[test]
    fn features_deserialize_snake_case() {
        let content = SiteContent::from_toml_str(
            r#"
[[pages]]
id = "contact"
title = "Contact"
features = ["contact_form"]
"#,
        )
        .unwrap();
        let page = content.feature_page(PageFeature::ContactForm).unwrap();
        assert_eq!(page.id, "contact");
    }

    #[test]
    fn fragment_links_skip_external_urls() {
        let links = fragment_links(
            "See [our work](#initiatives), the [portal](https://example.org) and [`faq`](#faq).",
        );
        assert_eq!(
            links,
            vec![
                LinkRef {
                    label: "our work".to_string(),
                    href: "#initiatives".to_string(),
                },
                LinkRef {
                    label: "faq".to_string(),
                    href: "#faq".to_string(),
                },
            ]
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteContent::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[[pages]]\nid = \"home\"\ntitle = \"Home\"\n").unwrap();
        let content = SiteContent::load(&path).unwrap();
        assert_eq!(content.pages[0].id, "home");
    }
}
