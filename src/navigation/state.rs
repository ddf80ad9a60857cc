use crate::config::{HEADER_SOLID_THRESHOLD, SECTION_OFFSET};

/// Anchorable regions of the page that the header tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Services,
    About,
    Faq,
    Contact,
}

impl SectionId {
    /// Order in which sections are tested against the scroll position.
    pub const TRACKED: [SectionId; 4] = [
        SectionId::Services,
        SectionId::About,
        SectionId::Faq,
        SectionId::Contact,
    ];

    /// Order in which the header menus list their links.
    pub const MENU: [SectionId; 4] = [
        SectionId::Services,
        SectionId::Faq,
        SectionId::About,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Services => "services",
            SectionId::About => "about",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Services => "All Services",
            SectionId::About => "About",
            SectionId::Faq => "FAQs",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Vertical extent of a section in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Read-only geometry queries against the rendered page.
pub trait SectionLayout {
    /// `None` when the section is not in the document.
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

/// Where a pointer-down landed relative to the mobile drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Drawer,
    /// On the dimmed overlay, outside the drawer panel.
    Overlay,
    Elsewhere,
}

impl PointerTarget {
    /// The drawer sits above the overlay, so a hit on the drawer wins.
    pub fn from_containment(in_drawer: bool, in_overlay: bool) -> Self {
        if in_drawer {
            PointerTarget::Drawer
        } else if in_overlay {
            PointerTarget::Overlay
        } else {
            PointerTarget::Elsewhere
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub scroll_offset: u32,
    pub is_header_solid: bool,
    pub active_section: Option<SectionId>,
    pub is_drawer_open: bool,
}

impl NavigationState {
    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.scroll_offset = offset;
        self.is_header_solid = offset > HEADER_SOLID_THRESHOLD;
    }

    /// Re-derives the active section from the current scroll offset.
    /// Leaves it untouched when the probe falls between sections.
    /// Returns whether the active section changed.
    pub fn recompute_active_section(&mut self, layout: &dyn SectionLayout) -> bool {
        let previous = self.active_section;
        let probe = f64::from(self.scroll_offset) + f64::from(SECTION_OFFSET);

        let hit = SectionId::TRACKED.iter().copied().find(|section| {
            layout
                .bounds(*section)
                .map_or(false, |bounds| bounds.contains(probe))
        });
        if let Some(section) = hit {
            self.active_section = Some(section);
        }

        if self.scroll_offset < SECTION_OFFSET {
            self.active_section = None;
        }

        self.active_section != previous
    }

    pub fn open_drawer(&mut self) -> bool {
        let changed = !self.is_drawer_open;
        self.is_drawer_open = true;
        changed
    }

    pub fn close_drawer(&mut self) -> bool {
        let changed = self.is_drawer_open;
        self.is_drawer_open = false;
        changed
    }

    /// Only a press on the overlay dismisses an open drawer.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Overlay => self.close_drawer(),
            PointerTarget::Drawer | PointerTarget::Elsewhere => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct FixedLayout {
        sections: HashMap<SectionId, SectionBounds>,
    }

    impl FixedLayout {
        /// services 600..1400, about 1400..2200, (gap) faq 2400..3000, contact 3000..3800
        pub(crate) fn landing() -> Self {
            Self::default()
                .with(SectionId::Services, 600.0, 800.0)
                .with(SectionId::About, 1400.0, 800.0)
                .with(SectionId::Faq, 2400.0, 600.0)
                .with(SectionId::Contact, 3000.0, 800.0)
        }

        pub(crate) fn with(mut self, section: SectionId, top: f64, height: f64) -> Self {
            self.sections.insert(section, SectionBounds { top, height });
            self
        }

        pub(crate) fn without(mut self, section: SectionId) -> Self {
            self.sections.remove(&section);
            self
        }
    }

    impl SectionLayout for FixedLayout {
        fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
            self.sections.get(&section).copied()
        }
    }

    fn scrolled_to(offset: u32, layout: &FixedLayout) -> NavigationState {
        let mut state = NavigationState::default();
        state.set_scroll_offset(offset);
        state.recompute_active_section(layout);
        state
    }

    #[test]
    fn test_default_state() {
        let state = NavigationState::default();
        assert_eq!(state.scroll_offset, 0);
        assert!(!state.is_header_solid);
        assert_eq!(state.active_section, None);
        assert!(!state.is_drawer_open);
    }

    #[test]
    fn test_header_solid_threshold_is_exclusive() {
        let mut state = NavigationState::default();
        state.set_scroll_offset(50);
        assert!(!state.is_header_solid);
        state.set_scroll_offset(51);
        assert!(state.is_header_solid);
        state.set_scroll_offset(0);
        assert!(!state.is_header_solid);
    }

    #[test]
    fn test_no_active_section_near_top() {
        // A section starting at the very top would contain every probe below 100.
        let layout = FixedLayout::default().with(SectionId::Services, 0.0, 5000.0);
        for offset in [0, 1, 50, 99] {
            assert_eq!(scrolled_to(offset, &layout).active_section, None, "offset {}", offset);
        }
        assert_eq!(
            scrolled_to(100, &layout).active_section,
            Some(SectionId::Services)
        );
    }

    #[test]
    fn test_active_section_uses_header_offset() {
        let layout = FixedLayout::landing();
        // probe = offset + 100
        assert_eq!(scrolled_to(499, &layout).active_section, None);
        assert_eq!(scrolled_to(500, &layout).active_section, Some(SectionId::Services));
        assert_eq!(scrolled_to(1299, &layout).active_section, Some(SectionId::Services));
        assert_eq!(scrolled_to(1300, &layout).active_section, Some(SectionId::About));
        assert_eq!(scrolled_to(2500, &layout).active_section, Some(SectionId::Faq));
        assert_eq!(scrolled_to(2900, &layout).active_section, Some(SectionId::Contact));
    }

    #[test]
    fn test_gap_between_sections_keeps_previous() {
        let layout = FixedLayout::landing();
        let mut state = scrolled_to(1500, &layout);
        assert_eq!(state.active_section, Some(SectionId::About));

        // probe 2250 sits between about and faq
        state.set_scroll_offset(2150);
        assert!(!state.recompute_active_section(&layout));
        assert_eq!(state.active_section, Some(SectionId::About));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let layout = FixedLayout::default()
            .with(SectionId::About, 1000.0, 500.0)
            .with(SectionId::Faq, 1000.0, 500.0);
        assert_eq!(scrolled_to(1100, &layout).active_section, Some(SectionId::About));
    }

    #[test]
    fn test_missing_section_is_skipped() {
        let layout = FixedLayout::landing().without(SectionId::About);
        let state = scrolled_to(1500, &layout);
        // services was never active from this fresh state and about is absent
        assert_eq!(state.active_section, None);

        let state = scrolled_to(2500, &layout);
        assert_eq!(state.active_section, Some(SectionId::Faq));
    }

    #[test]
    fn test_drawer_transitions_are_idempotent() {
        let mut state = NavigationState::default();
        assert!(state.open_drawer());
        assert!(!state.open_drawer());
        assert!(state.is_drawer_open);

        assert!(state.close_drawer());
        assert!(!state.close_drawer());
        assert!(!state.is_drawer_open);
    }

    #[test]
    fn test_pointer_down_only_overlay_closes() {
        let mut state = NavigationState::default();
        state.open_drawer();

        assert!(!state.pointer_down(PointerTarget::Drawer));
        assert!(state.is_drawer_open);
        assert!(!state.pointer_down(PointerTarget::Elsewhere));
        assert!(state.is_drawer_open);

        assert!(state.pointer_down(PointerTarget::Overlay));
        assert!(!state.is_drawer_open);
        assert!(!state.pointer_down(PointerTarget::Overlay));
    }

    #[test]
    fn test_pointer_target_from_containment() {
        assert_eq!(PointerTarget::from_containment(true, false), PointerTarget::Drawer);
        assert_eq!(PointerTarget::from_containment(true, true), PointerTarget::Drawer);
        assert_eq!(PointerTarget::from_containment(false, true), PointerTarget::Overlay);
        assert_eq!(PointerTarget::from_containment(false, false), PointerTarget::Elsewhere);
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(SectionId::Faq.href(), "#faq");
        assert_eq!(SectionId::Services.label(), "All Services");
        let anchors: Vec<_> = SectionId::TRACKED.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["services", "about", "faq", "contact"]);
    }
}
