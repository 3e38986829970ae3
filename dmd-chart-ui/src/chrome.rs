//! Page chrome shared by both dashboard apps.
//!
//! `UiChrome` is provided through Dioxus context and handed to the
//! controllers as their `Notifier`. The theme and navigation helpers are
//! free functions because they run before (or outside) any component.

use dioxus::prelude::*;
use dmd_core::config::{ALERT_LIFETIME_MS, REFRESH_DELAY_MS, THEME_STORAGE_KEY};
use dmd_core::filter::alert_filter_url;
use dmd_core::{FilterState, Theme};
use dmd_pipeline::{AlertLevel, Notifier};
use web_sys::{Element, Storage};

use crate::js_bridge::sleep_ms;

const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// One banner in the alert placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertNotice {
    pub id: u64,
    pub message: String,
    pub level: AlertLevel,
}

/// Append a notice and return its id. Ids start at `*next_id` and only grow.
fn push_notice(
    notices: &mut Vec<AlertNotice>,
    next_id: &mut u64,
    message: &str,
    level: AlertLevel,
) -> u64 {
    let id = *next_id;
    *next_id += 1;
    notices.push(AlertNotice {
        id,
        message: message.to_string(),
        level,
    });
    id
}

fn remove_notice(notices: &mut Vec<AlertNotice>, id: u64) {
    notices.retain(|n| n.id != id);
}

/// Alert banners for the current page.
///
/// Notices are appended in order and each one removes itself after
/// `ALERT_LIFETIME_MS` unless dismissed first.
#[derive(Clone, Copy)]
pub struct UiChrome {
    notices: Signal<Vec<AlertNotice>>,
    next_id: Signal<u64>,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            notices: Signal::new(Vec::new()),
            next_id: Signal::new(1),
        }
    }

    /// Banners currently on screen, oldest first.
    pub fn notices(&self) -> Signal<Vec<AlertNotice>> {
        self.notices
    }

    pub fn dismiss(&self, id: u64) {
        let mut notices = self.notices;
        remove_notice(&mut notices.write(), id);
    }
}

impl Default for UiChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for UiChrome {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        let mut next_id = self.next_id;
        let mut notices = self.notices;
        let id = push_notice(&mut notices.write(), &mut next_id.write(), message, level);

        let chrome = *self;
        spawn(async move {
            sleep_ms(ALERT_LIFETIME_MS).await;
            chrome.dismiss(id);
        });
    }
}

fn document_root() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Theme saved by an earlier toggle, if any.
pub fn stored_theme() -> Option<Theme> {
    local_storage()?
        .get_item(THEME_STORAGE_KEY)
        .ok()??
        .parse()
        .ok()
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document_root() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// Put the saved theme on `<html>`. Call before launching the app so the
/// first paint already uses it.
pub fn apply_stored_theme() {
    if let Some(theme) = stored_theme() {
        apply_theme(theme);
    }
}

/// Flip the page theme and remember the choice.
pub fn toggle_theme() -> Theme {
    let current = document_root().and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    let next = Theme::next_from_attribute(current.as_deref());
    apply_theme(next);
    match local_storage() {
        Some(storage) => {
            if storage.set_item(THEME_STORAGE_KEY, next.as_str()).is_err() {
                log::warn!("could not persist theme preference");
            }
        }
        None => log::warn!("localStorage unavailable, theme not persisted"),
    }
    log::info!("theme switched to {}", next);
    next
}

/// Wait the cosmetic refresh delay, then reload the page.
pub async fn reload_after_delay() {
    sleep_ms(REFRESH_DELAY_MS).await;
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("page reload failed: {:?}", e);
        }
    }
}

/// Reload the current page with the alert filter in its query string.
pub fn navigate_with_alert_filter(filter: &FilterState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let current = match location.href() {
        Ok(href) => href,
        Err(e) => {
            log::error!("could not read page URL: {:?}", e);
            return;
        }
    };
    match alert_filter_url(&current, filter) {
        Ok(target) => {
            if let Err(e) = location.set_href(&target) {
                log::error!("navigation failed: {:?}", e);
            }
        }
        Err(e) => log::error!("bad page URL {}: {}", current, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_keep_arrival_order_and_unique_ids() {
        let mut notices = Vec::new();
        let mut next_id = 1;
        let first = push_notice(&mut notices, &mut next_id, "first", AlertLevel::Danger);
        let second = push_notice(&mut notices, &mut next_id, "second", AlertLevel::Info);
        let third = push_notice(&mut notices, &mut next_id, "third", AlertLevel::Warning);

        assert!(first < second && second < third);
        let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(notices[1].level, AlertLevel::Info);
    }

    #[test]
    fn removing_one_notice_leaves_the_rest() {
        let mut notices = Vec::new();
        let mut next_id = 1;
        let first = push_notice(&mut notices, &mut next_id, "first", AlertLevel::Danger);
        let second = push_notice(&mut notices, &mut next_id, "second", AlertLevel::Danger);

        remove_notice(&mut notices, first);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].id, second);

        // A second timer firing for an already dismissed notice is harmless.
        remove_notice(&mut notices, first);
        assert_eq!(notices.len(), 1);

        let third = push_notice(&mut notices, &mut next_id, "third", AlertLevel::Danger);
        assert!(third > second);
    }

    #[test]
    fn notices_expire_after_five_seconds() {
        assert_eq!(ALERT_LIFETIME_MS, 5000);
    }
}
