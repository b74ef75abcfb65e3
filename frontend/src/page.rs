use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, ScrollBehavior, ScrollToOptions, Window};

use crate::sections::SectionBounds;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to register `{event_type}` listener: {reason}")]
    Listener {
        event_type: &'static str,
        reason: String,
    },
}

/// The parts of the hosting page the controllers need: where the viewport is,
/// where sections are, and a way to move the viewport.
pub trait Page {
    fn scroll_offset(&self) -> f64;

    /// `None` when no element with that id is rendered.
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;

    fn scroll_smoothly_to(&self, top: f64);
}

/// Page-wide events the controllers follow. A subscription detaches its
/// listener when dropped.
pub trait PageEvents {
    type Subscription: 'static;

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Self::Subscription, PageError>;

    /// `handler` receives the `href` of a clicked in-page link and returns
    /// whether the browser's default navigation must be suppressed.
    fn on_anchor_click(
        &self,
        handler: Box<dyn FnMut(Option<String>) -> bool>,
    ) -> Result<Self::Subscription, PageError>;
}

#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn current() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Page for BrowserPage {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        let element = self.document.get_element_by_id(section_id)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top() + self.scroll_offset(), rect.height()))
    }

    fn scroll_smoothly_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl PageEvents for BrowserPage {
    type Subscription = EventSubscription;

    fn on_scroll(&self, mut handler: Box<dyn FnMut()>) -> Result<EventSubscription, PageError> {
        EventSubscription::listen(&self.window, "scroll", move |_| handler())
    }

    fn on_anchor_click(
        &self,
        mut handler: Box<dyn FnMut(Option<String>) -> bool>,
    ) -> Result<EventSubscription, PageError> {
        EventSubscription::listen(&self.document, "click", move |event: Event| {
            let anchor = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a[href^='#']").ok().flatten());
            let Some(anchor) = anchor else { return };

            if handler(anchor.get_attribute("href")) {
                event.prevent_default();
            }
        })
    }
}

/// A DOM event listener that is removed again when the subscription is dropped.
pub struct EventSubscription {
    target: EventTarget,
    event_type: &'static str,
    listener: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen<F>(
        target: &EventTarget,
        event_type: &'static str,
        handler: F,
    ) -> Result<Self, PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())
            .map_err(|err| PageError::Listener {
                event_type,
                reason: format!("{:?}", err),
            })?;

        Ok(Self {
            target: target.clone(),
            event_type,
            listener,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.listener.as_ref().unchecked_ref());
    }
}
