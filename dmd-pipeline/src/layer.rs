//! Overlay layer bookkeeping.
//!
//! Each layer walks `Empty -> Loading -> Populated`, goes back to `Loading`
//! on every filter change, and to `Failed` when a fetch errors. A failed
//! layer keeps whatever it was showing.
//!
//! Requests are numbered per layer. Only the response to the most recent
//! request may change the layer; anything older is dropped when it lands.

/// The two overlay layers on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Disasters,
    RiskZones,
}

impl LayerKind {
    /// Layer group name on the JS side.
    pub fn js_name(self) -> &'static str {
        match self {
            LayerKind::Disasters => "disasters",
            LayerKind::RiskZones => "riskZones",
        }
    }

    /// DOM id of the visibility switch.
    pub fn toggle_id(self) -> &'static str {
        match self {
            LayerKind::Disasters => "toggle-disasters",
            LayerKind::RiskZones => "toggle-risk-zones",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayerKind::Disasters => "Disasters",
            LayerKind::RiskZones => "Risk Zones",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerState {
    Empty,
    Loading,
    /// Showing this many items.
    Populated(usize),
    Failed,
}

/// Sequence number handed out when a load begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct OverlayLayer {
    state: LayerState,
    latest: u64,
    items: usize,
    visible: bool,
}

impl OverlayLayer {
    /// A new, empty, visible layer.
    pub fn new() -> Self {
        Self {
            state: LayerState::Empty,
            latest: 0,
            items: 0,
            visible: true,
        }
    }

    pub fn state(&self) -> LayerState {
        self.state
    }

    /// Items currently drawn, including after a failed refresh.
    pub fn items(&self) -> usize {
        self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.state == LayerState::Loading
    }

    /// Start a load; the returned ticket supersedes every earlier one.
    pub fn begin_load(&mut self) -> Ticket {
        self.latest += 1;
        self.state = LayerState::Loading;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Record a successful load. Returns false, changing nothing, if `ticket` is stale.
    pub fn finish_populated(&mut self, ticket: Ticket, items: usize) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.items = items;
        self.state = LayerState::Populated(items);
        true
    }

    /// Record a failed load. Returns false, changing nothing, if `ticket` is stale.
    pub fn finish_failed(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = LayerState::Failed;
        true
    }

    /// Returns true if visibility actually changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

impl Default for OverlayLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_happy_path() {
        let mut layer = OverlayLayer::new();
        assert_eq!(layer.state(), LayerState::Empty);
        let ticket = layer.begin_load();
        assert!(layer.is_loading());
        assert!(layer.finish_populated(ticket, 3));
        assert_eq!(layer.state(), LayerState::Populated(3));

        let ticket = layer.begin_load();
        assert_eq!(layer.state(), LayerState::Loading);
        assert!(layer.finish_populated(ticket, 0));
        assert_eq!(layer.items(), 0);
    }

    #[test]
    fn failure_keeps_items() {
        let mut layer = OverlayLayer::new();
        let ticket = layer.begin_load();
        layer.finish_populated(ticket, 4);
        let ticket = layer.begin_load();
        assert!(layer.finish_failed(ticket));
        assert_eq!(layer.state(), LayerState::Failed);
        assert_eq!(layer.items(), 4);
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut layer = OverlayLayer::new();
        let first = layer.begin_load();
        let second = layer.begin_load();
        assert!(first < second);

        assert!(layer.finish_populated(second, 2));
        assert!(!layer.finish_populated(first, 9));
        assert!(!layer.finish_failed(first));
        assert_eq!(layer.state(), LayerState::Populated(2));
    }

    #[test]
    fn visibility_reports_changes_only() {
        let mut layer = OverlayLayer::new();
        assert!(layer.is_visible());
        assert!(!layer.set_visible(true));
        assert!(layer.set_visible(false));
        assert!(!layer.is_visible());
    }

    #[test]
    fn kind_names() {
        assert_eq!(LayerKind::RiskZones.js_name(), "riskZones");
        assert_eq!(LayerKind::Disasters.toggle_id(), "toggle-disasters");
    }
}
