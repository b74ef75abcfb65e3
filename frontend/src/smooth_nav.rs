use log::debug;

use crate::config;
use crate::page::{Page, PageError, PageEvents};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Default navigation must be suppressed.
    Scrolled { top: f64 },
    /// In-page link to an id that is not rendered; the browser handles it.
    MissingTarget,
    NotAnAnchor,
}

/// Replaces the jump of in-page links with a smooth scroll that leaves room
/// for the fixed header.
#[derive(Clone, Copy, Debug)]
pub struct SmoothNavigator {
    anchor_offset: f64,
}

impl Default for SmoothNavigator {
    fn default() -> Self {
        Self {
            anchor_offset: config::ANCHOR_OFFSET,
        }
    }
}

impl SmoothNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_anchor_offset(anchor_offset: f64) -> Self {
        Self { anchor_offset }
    }

    /// `"#contact"` -> `Some("contact")`. A bare `"#"` has no target.
    pub fn anchor_target(href: &str) -> Option<&str> {
        href.strip_prefix('#').filter(|id| !id.is_empty())
    }

    /// Returns `false` when the section is not on the page.
    pub fn scroll_to_section<P: Page>(&self, section_id: &str, page: &P) -> bool {
        match page.section_bounds(section_id) {
            Some(bounds) => {
                page.scroll_smoothly_to(bounds.top - self.anchor_offset);
                true
            }
            None => {
                debug!("No section `{}` to scroll to", section_id);
                false
            }
        }
    }

    pub fn handle_href<P: Page>(&self, href: Option<&str>, page: &P) -> ClickOutcome {
        let Some(href) = href.filter(|href| href.starts_with('#')) else {
            return ClickOutcome::NotAnAnchor;
        };
        let Some(section_id) = Self::anchor_target(href) else {
            return ClickOutcome::MissingTarget;
        };
        match page.section_bounds(section_id) {
            Some(bounds) => {
                let top = bounds.top - self.anchor_offset;
                page.scroll_smoothly_to(top);
                ClickOutcome::Scrolled { top }
            }
            None => {
                debug!("Anchor `{}` has no target", href);
                ClickOutcome::MissingTarget
            }
        }
    }

    /// Intercepts clicks on in-page links anywhere in the document until the
    /// returned handle is disposed or dropped.
    pub fn start<P>(self, page: P) -> Result<SmoothNavigatorHandle<P::Subscription>, PageError>
    where
        P: Page + PageEvents + Clone + 'static,
    {
        let listener_page = page.clone();
        let subscription = page.on_anchor_click(Box::new(move |href| {
            matches!(
                self.handle_href(href.as_deref(), &listener_page),
                ClickOutcome::Scrolled { .. }
            )
        }))?;

        Ok(SmoothNavigatorHandle {
            subscription: Some(subscription),
        })
    }
}

pub struct SmoothNavigatorHandle<S> {
    subscription: Option<S>,
}

impl<S> SmoothNavigatorHandle<S> {
    pub fn dispose(&mut self) {
        if self.subscription.take().is_some() {
            debug!("Smooth navigation stopped");
        }
    }
}
