use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

use crate::config::SCROLL_DEBOUNCE_MS;
use crate::navigation::controller::{NavigationController, Viewport};
use crate::navigation::debounce::GlooTimers;
use crate::navigation::state::{
    NavigationState, PointerTarget, SectionBounds, SectionId, SectionLayout,
};

/// The live document.
pub struct DomPage;

fn section_element(section: SectionId) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.anchor())?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl SectionLayout for DomPage {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let element = section_element(section)?;
        Some(SectionBounds {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
}

impl Viewport for DomPage {
    fn scroll_to_section(&self, section: SectionId) {
        match section_element(section) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => warn!("No #{} section to scroll to", section.anchor()),
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

pub type DomNavigation = NavigationController<GlooTimers, DomPage>;

fn current_scroll_offset() -> Option<u32> {
    let scroll_y = web_sys::window()?.scroll_y().ok()?;
    Some(scroll_y.max(0.0).round() as u32)
}

fn contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref
        .get()
        .map_or(false, |node| target.is_some() && node.contains(target))
}

fn classify(drawer: &NodeRef, overlay: &NodeRef, event: &MouseEvent) -> PointerTarget {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    PointerTarget::from_containment(
        contains(drawer, target.as_ref()),
        contains(overlay, target.as_ref()),
    )
}

/// What the header renders from and the actions it can trigger.
#[derive(Clone)]
pub struct UseNavigationHandle {
    pub state: NavigationState,
    controller: Rc<RefCell<DomNavigation>>,
}

impl UseNavigationHandle {
    pub fn open_drawer(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: MouseEvent| controller.borrow().open_drawer())
    }

    pub fn close_drawer(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: MouseEvent| controller.borrow().close_drawer())
    }

    pub fn navigate_to(&self, section: SectionId) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.borrow().navigate_to(section);
        })
    }

    pub fn scroll_to_top(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: MouseEvent| controller.borrow().scroll_to_top())
    }
}

/// Wires a [`NavigationController`] to window scroll and document
/// pointer-down events for the lifetime of the calling component.
#[hook]
pub fn use_navigation(drawer_ref: NodeRef, overlay_ref: NodeRef) -> UseNavigationHandle {
    let state = use_state(NavigationState::default);
    let controller = use_mut_ref(|| {
        NavigationController::new(GlooTimers, DomPage, SCROLL_DEBOUNCE_MS)
    });

    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = controller
                    .borrow()
                    .subscribe(Callback::from(move |next| state.set(next)));

                let window = web_sys::window();
                let document = window.as_ref().and_then(|w| w.document());

                let scroll_callback = {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move || {
                        if let Some(offset) = current_scroll_offset() {
                            controller.borrow_mut().on_scroll(offset);
                        }
                    }) as Box<dyn FnMut()>)
                };

                let pointer_callback = {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        let target = classify(&drawer_ref, &overlay_ref, &e);
                        controller.borrow().pointer_down(target);
                    }) as Box<dyn FnMut(MouseEvent)>)
                };

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not register scroll listener");
                    }
                }
                if let Some(document) = &document {
                    if document
                        .add_event_listener_with_callback(
                            "mousedown",
                            pointer_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not register pointer-down listener");
                    }
                }
                debug!("Navigation listeners registered");

                // Pick up a restored scroll position on reload.
                if let Some(offset) = current_scroll_offset() {
                    controller.borrow_mut().on_scroll(offset);
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "mousedown",
                            pointer_callback.as_ref().unchecked_ref(),
                        );
                    }
                    drop(subscription);
                    controller.borrow_mut().teardown();
                }
            },
            (),
        );
    }

    UseNavigationHandle {
        state: (*state).clone(),
        controller,
    }
}
