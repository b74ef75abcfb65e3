use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::Callback;

use crate::config;
use crate::page::{Page, PageError, PageEvents};
use crate::sections::NavigationItem;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub active_section: Option<&'static str>,
}

/// Tracks which section sits under the fixed header.
pub struct ScrollSpy {
    items: Vec<NavigationItem>,
    header_offset: f64,
    state: ScrollState,
}

impl ScrollSpy {
    pub fn new(items: &[NavigationItem]) -> Self {
        Self {
            items: items.to_vec(),
            header_offset: config::SCROLL_SPY_OFFSET,
            state: ScrollState::default(),
        }
    }

    #[cfg(test)]
    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }

    #[cfg(test)]
    pub fn active_section(&self) -> Option<&'static str> {
        self.state.active_section
    }

    /// Section whose bounds contain `scroll_offset + header_offset`.
    ///
    /// Sections are checked in navigation order and the first hit wins, so
    /// overlapping layouts still resolve to a single section. Sections that
    /// are not rendered are skipped.
    pub fn locate<P: Page>(&self, scroll_offset: f64, page: &P) -> Option<&'static str> {
        let position = scroll_offset + self.header_offset;
        self.items
            .iter()
            .find(|item| {
                page.section_bounds(item.section_id)
                    .map_or(false, |bounds| bounds.contains(position))
            })
            .map(|item| item.section_id)
    }

    /// Re-reads the page and returns whether the active section changed.
    pub fn update<P: Page>(&mut self, page: &P) -> bool {
        let active = self.locate(page.scroll_offset(), page);
        if active == self.state.active_section {
            return false;
        }
        debug!("Active section: {:?} -> {:?}", self.state.active_section, active);
        self.state.active_section = active;
        true
    }

    /// Follows page scrolling until the returned handle is disposed or
    /// dropped. `on_change` receives the initial state and every later change.
    pub fn start<P>(
        self,
        page: P,
        on_change: Callback<ScrollState>,
    ) -> Result<ScrollSpyHandle<P::Subscription>, PageError>
    where
        P: Page + PageEvents + Clone + 'static,
    {
        let spy = Rc::new(RefCell::new(self));

        let initial = {
            let mut spy = spy.borrow_mut();
            spy.update(&page);
            spy.state.clone()
        };
        on_change.emit(initial);

        let listener_page = page.clone();
        let subscription = page.on_scroll(Box::new(move || {
            let changed = {
                let mut spy = spy.borrow_mut();
                spy.update(&listener_page).then(|| spy.state.clone())
            };
            if let Some(state) = changed {
                on_change.emit(state);
            }
        }))?;

        Ok(ScrollSpyHandle {
            subscription: Some(subscription),
        })
    }
}

/// Dropping the handle stops the spy as well.
pub struct ScrollSpyHandle<S> {
    subscription: Option<S>,
}

impl<S> ScrollSpyHandle<S> {
    pub fn dispose(&mut self) {
        if self.subscription.take().is_some() {
            debug!("Scroll spy stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::page::fake::FakePage;
    use crate::sections::NAV_ITEMS;

    fn stacked_page() -> FakePage {
        FakePage::new()
            .with_section("home", 0.0, 800.0)
            .with_section("about", 800.0, 600.0)
            .with_section("services", 1400.0, 700.0)
            .with_section("gallery", 2100.0, 900.0)
            .with_section("contact", 3000.0, 500.0)
    }

    #[test]
    fn header_offset_shifts_the_boundary() {
        let spy = ScrollSpy::new(&NAV_ITEMS);
        let page = stacked_page();

        assert_eq!(spy.locate(0.0, &page), Some("home"));
        assert_eq!(spy.locate(699.0, &page), Some("home"));
        assert_eq!(spy.locate(700.0, &page), Some("about"));
        assert_eq!(spy.locate(2_950.0, &page), Some("contact"));
    }

    #[test]
    fn nothing_is_active_outside_every_section() {
        let spy = ScrollSpy::new(&NAV_ITEMS);
        let page = FakePage::new()
            .with_section("home", 400.0, 300.0)
            .with_section("about", 700.0, 300.0);

        assert_eq!(spy.locate(0.0, &page), None);
        assert_eq!(spy.locate(900.0, &page), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let spy = ScrollSpy::new(&NAV_ITEMS);
        let page = FakePage::new()
            .with_section("home", 0.0, 500.0)
            .with_section("contact", 500.0, 500.0);

        assert_eq!(spy.locate(450.0, &page), Some("contact"));
    }

    #[test]
    fn overlapping_sections_resolve_to_first_in_nav_order() {
        let spy = ScrollSpy::new(&NAV_ITEMS);
        let page = FakePage::new()
            .with_section("about", 0.0, 1_000.0)
            .with_section("services", 500.0, 1_000.0);

        assert_eq!(spy.locate(600.0, &page), Some("about"));
    }

    #[test]
    fn update_reports_only_changes() {
        let mut spy = ScrollSpy::new(&NAV_ITEMS);
        let page = stacked_page();

        assert!(spy.update(&page));
        assert_eq!(spy.active_section(), Some("home"));
        page.set_scroll(200.0);
        assert!(!spy.update(&page));
        page.set_scroll(1_500.0);
        assert!(spy.update(&page));
        assert_eq!(spy.active_section(), Some("services"));
    }

    #[test]
    fn custom_header_offset_is_respected() {
        let spy = ScrollSpy::new(&NAV_ITEMS).with_header_offset(0.0);
        let page = stacked_page();

        assert_eq!(spy.locate(750.0, &page), Some("home"));
    }

    proptest! {
        #[test]
        fn active_section_contains_offset_plus_header(offset in 0.0f64..4_000.0) {
            let spy = ScrollSpy::new(&NAV_ITEMS);
            let page = stacked_page();
            let position = offset + config::SCROLL_SPY_OFFSET;

            let containing: Vec<&str> = NAV_ITEMS
                .iter()
                .filter(|item| page.section_bounds(item.section_id).unwrap().contains(position))
                .map(|item| item.section_id)
                .collect();

            prop_assert!(containing.len() <= 1);
            prop_assert_eq!(spy.locate(offset, &page), containing.first().copied());
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<ScrollState>>>, Callback<ScrollState>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = seen.clone();
            Callback::from(move |state| seen.borrow_mut().push(state))
        };
        (seen, on_change)
    }

    fn active(id: &'static str) -> ScrollState {
        ScrollState {
            active_section: Some(id),
        }
    }

    #[test]
    fn start_reports_initial_state_and_listens_once() {
        let page = stacked_page();
        page.set_scroll(900.0);
        let (seen, on_change) = recorder();

        let _handle = ScrollSpy::new(&NAV_ITEMS).start(page.clone(), on_change).unwrap();

        assert_eq!(*seen.borrow(), vec![active("about")]);
        assert_eq!(page.listeners_added(), 1);
        assert_eq!(page.active_listeners(), 1);
    }

    #[test]
    fn scrolling_emits_only_section_changes() {
        let page = stacked_page();
        let (seen, on_change) = recorder();
        let _handle = ScrollSpy::new(&NAV_ITEMS).start(page.clone(), on_change).unwrap();

        page.scroll_by_user(100.0);
        page.scroll_by_user(300.0);
        page.scroll_by_user(1_000.0);
        page.scroll_by_user(1_100.0);
        page.scroll_by_user(1_500.0);

        assert_eq!(
            *seen.borrow(),
            vec![active("home"), active("about"), active("services")]
        );
    }

    #[test]
    fn dispose_detaches_the_scroll_listener() {
        let page = stacked_page();
        let (seen, on_change) = recorder();
        let mut handle = ScrollSpy::new(&NAV_ITEMS).start(page.clone(), on_change).unwrap();

        handle.dispose();
        handle.dispose();
        page.scroll_by_user(3_000.0);

        assert_eq!(page.active_listeners(), 0);
        assert_eq!(page.listeners_removed(), 1);
        assert_eq!(*seen.borrow(), vec![active("home")]);
    }

    #[test]
    fn dropping_the_handle_detaches_the_scroll_listener() {
        let page = stacked_page();
        let (seen, on_change) = recorder();
        let handle = ScrollSpy::new(&NAV_ITEMS).start(page.clone(), on_change).unwrap();

        drop(handle);
        page.scroll_by_user(3_000.0);

        assert_eq!(page.active_listeners(), 0);
        assert_eq!(seen.borrow().len(), 1);
    }
}
