use std::fmt;
use std::str::FromStr;

/// Bootstrap colour mode written to `<html data-bs-theme>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme. Anything that is not dark toggles to dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Theme after a toggle, given the raw attribute currently on the page.
    pub fn next_from_attribute(current: Option<&str>) -> Self {
        current
            .and_then(|c| c.parse::<Theme>().ok())
            .map_or(Theme::Dark, Theme::toggled)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn next_from_attribute() {
        assert_eq!(Theme::next_from_attribute(Some("dark")), Theme::Light);
        assert_eq!(Theme::next_from_attribute(Some("light")), Theme::Dark);
        assert_eq!(Theme::next_from_attribute(None), Theme::Dark);
        assert_eq!(Theme::next_from_attribute(Some("auto")), Theme::Dark);
    }

    #[test]
    fn parse_stored_value() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
