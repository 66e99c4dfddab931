//! Static marketing pages.
//!
//! Content is fixed at compile time ([`content`]); the company record is
//! interpolated per request from the shared [`crate::config::SiteConfig`].

pub mod content;
pub mod render;

pub use render::{escape, render, render_not_found};

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Shippers,
    Drivers,
    Safety,
    About,
    Quote,
    Contact,
    Privacy,
    SmsTerms,
}

impl Page {
    pub const ALL: &'static [Page] = &[
        Page::Home,
        Page::Services,
        Page::Shippers,
        Page::Drivers,
        Page::Safety,
        Page::About,
        Page::Quote,
        Page::Contact,
        Page::Privacy,
        Page::SmsTerms,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Services => "/services",
            Page::Shippers => "/shippers",
            Page::Drivers => "/drivers",
            Page::Safety => "/safety",
            Page::About => "/about",
            Page::Quote => "/quote",
            Page::Contact => "/contact",
            Page::Privacy => "/privacy",
            Page::SmsTerms => "/sms-terms",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Professional Freight Transportation",
            Page::Services => "Services",
            Page::Shippers => "Shippers",
            Page::Drivers => "Drivers",
            Page::Safety => "Safety & Compliance",
            Page::About => "About Us",
            Page::Quote => "Get a Quote",
            Page::Contact => "Contact Us",
            Page::Privacy => "Privacy Policy",
            Page::SmsTerms => "SMS Terms",
        }
    }

    /// Resolve a request path; a single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Page::ALL.iter().copied().find(|p| p.path() == path)
    }
}
