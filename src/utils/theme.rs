use std::fmt::{Display, Formatter};
use std::str::FromStr;

use dioxus::prelude::*;

use crate::utils::platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn complement(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unrecognized theme value: {}", other)),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the startup theme. Precedence: persisted preference, then the
/// platform prefers-dark signal, then light.
pub fn initialize() -> Theme {
    resolve(platform::load_persisted(), platform::prefers_dark())
}

pub(crate) fn resolve(persisted: Option<String>, prefers_dark: Option<bool>) -> Theme {
    if let Some(saved) = persisted.and_then(|raw| raw.parse().ok()) {
        return saved;
    }
    if prefers_dark.unwrap_or(false) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Persist the preference and update the document-level dark flag. This is
/// the only place that touches either; views never write them directly.
pub fn apply(preference: Theme) {
    platform::persist(preference);
    platform::set_presentation_flag(preference);
}

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    preference: Signal<Theme>,
}

impl ThemeStore {
    /// Resolves the startup theme and shares the store through context.
    /// Must run before any theme-dependent view renders.
    pub fn provide() -> Self {
        use_context_provider(|| {
            let startup = initialize();
            platform::set_presentation_flag(startup);
            log::info!("theme initialized to {}", startup);
            Self {
                preference: Signal::new(startup),
            }
        })
    }

    pub fn current(&self) -> Theme {
        (self.preference)()
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    pub fn apply(&mut self, preference: Theme) {
        apply(preference);
        self.preference.set(preference);
    }

    pub fn toggle(&mut self) {
        let next = self.current().complement();
        self.apply(next);
    }
}

pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
}
