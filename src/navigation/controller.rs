use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use yew::Callback;

use crate::navigation::debounce::{Debouncer, TimerFactory};
use crate::navigation::state::{NavigationState, PointerTarget, SectionId, SectionLayout};

/// Scroll commands issued against the page.
pub trait Viewport {
    fn scroll_to_section(&self, section: SectionId);
    fn scroll_to_top(&self);
}

#[derive(Default)]
struct Hub {
    state: NavigationState,
    listeners: Vec<(usize, Callback<NavigationState>)>,
    next_id: usize,
}

impl Hub {
    fn notify(hub: &Rc<RefCell<Hub>>) {
        // Listeners run without the hub borrowed so they may read it again.
        let (state, listeners) = {
            let hub = hub.borrow();
            let listeners: Vec<_> = hub.listeners.iter().map(|(_, cb)| cb.clone()).collect();
            (hub.state.clone(), listeners)
        };
        for listener in listeners {
            listener.emit(state.clone());
        }
    }

    fn update<F>(hub: &Rc<RefCell<Hub>>, f: F)
    where
        F: FnOnce(&mut NavigationState) -> bool,
    {
        let changed = f(&mut hub.borrow_mut().state);
        if changed {
            Hub::notify(hub);
        }
    }
}

/// Keeps the listener registered until dropped.
pub struct Subscription {
    id: usize,
    hub: Weak<RefCell<Hub>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Owns the header's navigation state: scroll tracking, the debounced
/// active-section recomputation and the mobile drawer.
pub struct NavigationController<T, P>
where
    T: TimerFactory,
    P: SectionLayout + Viewport + 'static,
{
    hub: Rc<RefCell<Hub>>,
    page: Rc<P>,
    recompute: Debouncer<T>,
}

impl<T, P> NavigationController<T, P>
where
    T: TimerFactory,
    P: SectionLayout + Viewport + 'static,
{
    pub fn new(timers: T, page: P, debounce_ms: u32) -> Self {
        Self {
            hub: Rc::new(RefCell::new(Hub::default())),
            page: Rc::new(page),
            recompute: Debouncer::new(timers, debounce_ms),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.hub.borrow().state.clone()
    }

    pub fn subscribe(&self, listener: Callback<NavigationState>) -> Subscription {
        let mut hub = self.hub.borrow_mut();
        let id = hub.next_id;
        hub.next_id += 1;
        hub.listeners.push((id, listener));
        Subscription {
            id,
            hub: Rc::downgrade(&self.hub),
        }
    }

    /// Header style follows the offset immediately; the active section is
    /// recomputed once scrolling has been quiet for the debounce window.
    /// Listeners only hear about scrolls that flip the header style.
    pub fn on_scroll(&mut self, offset: u32) {
        Hub::update(&self.hub, |state| {
            let was_solid = state.is_header_solid;
            state.set_scroll_offset(offset);
            state.is_header_solid != was_solid
        });

        let hub = Rc::downgrade(&self.hub);
        let page = Rc::downgrade(&self.page);
        self.recompute.call(move || {
            let (Some(hub), Some(page)) = (hub.upgrade(), page.upgrade()) else {
                return;
            };
            Hub::update(&hub, |state| {
                let changed = state.recompute_active_section(page.as_ref());
                if changed {
                    debug!(
                        "Active section is now {:?}",
                        state.active_section.map(SectionId::anchor)
                    );
                }
                changed
            });
        });
    }

    pub fn open_drawer(&self) {
        Hub::update(&self.hub, |state| {
            let changed = state.open_drawer();
            if changed {
                debug!("Drawer opened");
            }
            changed
        });
    }

    pub fn close_drawer(&self) {
        Hub::update(&self.hub, |state| {
            let changed = state.close_drawer();
            if changed {
                debug!("Drawer closed");
            }
            changed
        });
    }

    pub fn pointer_down(&self, target: PointerTarget) {
        Hub::update(&self.hub, |state| {
            let changed = state.pointer_down(target);
            if changed {
                debug!("Drawer dismissed from overlay");
            }
            changed
        });
    }

    pub fn navigate_to(&self, section: SectionId) {
        info!("Navigating to #{}", section.anchor());
        self.page.scroll_to_section(section);
        self.close_drawer();
    }

    pub fn scroll_to_top(&self) {
        self.page.scroll_to_top();
    }

    /// Cancels a pending recomputation. Dropping the controller does the same.
    pub fn teardown(&mut self) {
        self.recompute.cancel();
        debug!("Navigation controller torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::debounce::testing::ManualTimers;
    use crate::navigation::state::tests::FixedLayout;
    use crate::navigation::state::SectionBounds;

    struct TestPage {
        layout: FixedLayout,
        scrolls: Rc<RefCell<Vec<Option<SectionId>>>>,
    }

    impl SectionLayout for TestPage {
        fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
            self.layout.bounds(section)
        }
    }

    impl Viewport for TestPage {
        fn scroll_to_section(&self, section: SectionId) {
            self.scrolls.borrow_mut().push(Some(section));
        }

        fn scroll_to_top(&self) {
            self.scrolls.borrow_mut().push(None);
        }
    }

    type TestController = NavigationController<ManualTimers, TestPage>;

    fn controller() -> (TestController, ManualTimers, Rc<RefCell<Vec<Option<SectionId>>>>) {
        let timers = ManualTimers::default();
        let scrolls = Rc::new(RefCell::new(Vec::new()));
        let page = TestPage {
            layout: FixedLayout::landing(),
            scrolls: scrolls.clone(),
        };
        (NavigationController::new(timers.clone(), page, 100), timers, scrolls)
    }

    fn record(controller: &TestController) -> (Subscription, Rc<RefCell<Vec<NavigationState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription =
            controller.subscribe(Callback::from(move |state| sink.borrow_mut().push(state)));
        (subscription, seen)
    }

    #[test]
    fn test_scroll_scenario() {
        let (mut nav, timers, _) = controller();

        nav.on_scroll(0);
        timers.advance(100);
        let state = nav.state();
        assert_eq!(state.active_section, None);
        assert!(!state.is_header_solid);

        nav.on_scroll(60);
        let state = nav.state();
        assert!(state.is_header_solid);
        assert_eq!(state.active_section, None);

        // inside faq: probe 2600
        nav.on_scroll(2500);
        assert_eq!(nav.state().active_section, None);
        timers.advance(99);
        assert_eq!(nav.state().active_section, None);
        timers.advance(1);
        assert_eq!(nav.state().active_section, Some(SectionId::Faq));
    }

    #[test]
    fn test_burst_of_scrolls_recomputes_once_with_latest_offset() {
        let (mut nav, timers, _) = controller();
        let (_subscription, seen) = record(&nav);

        for offset in [700, 1500, 2500, 3100] {
            nav.on_scroll(offset);
            timers.advance(50);
        }
        assert_eq!(timers.pending(), 1);
        let before = seen.borrow().len();

        timers.advance(50);
        assert_eq!(nav.state().active_section, Some(SectionId::Contact));
        assert_eq!(seen.borrow().len(), before + 1);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_scrolls_without_visible_change_are_silent() {
        let (mut nav, _, _) = controller();
        let (_subscription, seen) = record(&nav);

        nav.on_scroll(200);
        assert_eq!(seen.borrow().len(), 1);
        for offset in 201..300 {
            nav.on_scroll(offset);
        }
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(nav.state().scroll_offset, 299);

        nav.on_scroll(10);
        assert_eq!(seen.borrow().len(), 2);
        assert!(!seen.borrow()[1].is_header_solid);
    }

    #[test]
    fn test_scrolling_back_to_top_clears_active() {
        let (mut nav, timers, _) = controller();
        nav.on_scroll(1500);
        timers.advance(100);
        assert_eq!(nav.state().active_section, Some(SectionId::About));

        nav.on_scroll(40);
        timers.advance(100);
        let state = nav.state();
        assert_eq!(state.active_section, None);
        assert!(!state.is_header_solid);
    }

    #[test]
    fn test_menu_then_overlay_click() {
        let (nav, _, _) = controller();
        nav.open_drawer();
        assert!(nav.state().is_drawer_open);

        nav.pointer_down(PointerTarget::Drawer);
        assert!(nav.state().is_drawer_open);

        nav.pointer_down(PointerTarget::Overlay);
        assert!(!nav.state().is_drawer_open);
    }

    #[test]
    fn test_repeated_drawer_calls_notify_once() {
        let (nav, _, _) = controller();
        let (_subscription, seen) = record(&nav);

        nav.open_drawer();
        nav.open_drawer();
        assert_eq!(seen.borrow().len(), 1);
        assert!(nav.state().is_drawer_open);

        nav.close_drawer();
        nav.close_drawer();
        assert_eq!(seen.borrow().len(), 2);
        assert!(!nav.state().is_drawer_open);
    }

    #[test]
    fn test_link_selection_closes_drawer_once() {
        let (nav, _, scrolls) = controller();
        let (_subscription, seen) = record(&nav);
        nav.open_drawer();
        seen.borrow_mut().clear();

        nav.navigate_to(SectionId::Faq);
        assert_eq!(*scrolls.borrow(), vec![Some(SectionId::Faq)]);
        assert!(!nav.state().is_drawer_open);
        assert_eq!(seen.borrow().len(), 1);

        // with the drawer already closed only the scroll happens
        nav.navigate_to(SectionId::About);
        assert_eq!(scrolls.borrow().len(), 2);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_scroll_to_top() {
        let (nav, _, scrolls) = controller();
        nav.scroll_to_top();
        assert_eq!(*scrolls.borrow(), vec![None]);
    }

    #[test]
    fn test_unsubscribe_on_drop() {
        let (nav, _, _) = controller();
        let (subscription, seen) = record(&nav);
        nav.open_drawer();
        drop(subscription);
        nav.close_drawer();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_teardown_cancels_pending_recompute() {
        let (mut nav, timers, _) = controller();
        nav.on_scroll(2500);
        nav.teardown();
        assert_eq!(timers.pending(), 0);
        timers.advance(1000);
        assert_eq!(nav.state().active_section, None);

        nav.on_scroll(2500);
        drop(nav);
        assert_eq!(timers.pending(), 0);
    }
}
