//! System color scheme source
//!
//! The platform reports its light/dark preference through
//! [`SystemPreference`]. Change notifications are pushed into
//! [`ThemeResolver::on_system_preference_changed`](crate::ThemeResolver::on_system_preference_changed)
//! by whoever owns the platform hook.

use crate::theme::ThemeVariant;

/// Reports the current system-level appearance, if known
pub trait SystemPreference {
    fn current(&self) -> Option<ThemeVariant>;
}

/// A preference that never changes on its own (headless hosts and tests)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<ThemeVariant>);

impl FixedPreference {
    pub fn unknown() -> Self {
        Self(None)
    }
}

impl SystemPreference for FixedPreference {
    fn current(&self) -> Option<ThemeVariant> {
        self.0
    }
}

impl<F> SystemPreference for F
where
    F: Fn() -> Option<ThemeVariant>,
{
    fn current(&self) -> Option<ThemeVariant> {
        self()
    }
}
