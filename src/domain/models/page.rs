//! Page Domain Model
//!
//! The fixed catalogue of pages served by the website. Each page is bound to
//! one route and one template.

/// A page of the website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    /// Name of the template rendered for this page, relative to the template directory
    #[must_use]
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Home => "website/index.html",
            Self::About => "website/about.html",
            Self::Contact => "website/contact.html",
        }
    }

    /// Canonical route of this page
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about/",
            Self::Contact => "/contact/",
        }
    }

    /// Short identifier used in logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The HTML produced by rendering a page's template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: Page,
    pub html: String,
}

impl RenderedPage {
    #[must_use]
    pub fn new(page: Page, html: String) -> Self {
        Self { page, html }
    }
}
