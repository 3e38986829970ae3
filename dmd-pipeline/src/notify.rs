/// Bootstrap contextual level of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Suffix for the `alert-*` class.
    pub fn as_class(self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }
}

/// Something that can put a banner in front of the user.
pub trait Notifier {
    fn show_alert(&self, message: &str, level: AlertLevel);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        (**self).show_alert(message, level)
    }
}
