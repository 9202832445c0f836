//! Theme resolution and change notification
//!
//! [`ThemeResolver`] owns the [`ThemeState`] and decides which variant is
//! active:
//!
//! 1. an explicit override (a fixed initial theme or a `set_theme` call) wins
//! 2. otherwise the system preference, when known and respected
//! 3. otherwise [`ThemeVariant::Light`]
//!
//! Subscribers are called synchronously, once per distinct change, before
//! the mutating call returns. A subscriber must not mutate the resolver it is
//! subscribed to; with a shared `Rc<RefCell<ThemeResolver>>` that attempt
//! fails fast on the borrow.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::system::SystemPreference;
use crate::theme::{ThemeBundle, ThemeVariant, TokenSet};

new_key_type! {
    /// Handle returned by [`ThemeResolver::subscribe`]
    pub struct SubscriptionId;
}

/// Payload delivered to subscribers
#[derive(Clone, Copy, Debug)]
pub struct ThemeChange {
    pub variant: ThemeVariant,
    pub tokens: &'static TokenSet,
}

/// Subscriber callback
pub type ThemeListener = Box<dyn FnMut(&ThemeChange)>;

/// Construction options for a [`ThemeResolver`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Fixed initial theme; when set, system preference changes are ignored
    pub initial: Option<ThemeVariant>,
    pub respect_system_preference: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            initial: None,
            respect_system_preference: true,
        }
    }
}

impl ThemeOptions {
    pub fn fixed(variant: ThemeVariant) -> Self {
        Self {
            initial: Some(variant),
            ..Self::default()
        }
    }

    pub fn ignore_system() -> Self {
        Self {
            respect_system_preference: false,
            ..Self::default()
        }
    }
}

/// Resolution inputs and the variant they produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub active: ThemeVariant,
    pub explicit_override: Option<ThemeVariant>,
    pub system_preference: Option<ThemeVariant>,
}

impl ThemeState {
    /// Apply the resolution rule to a set of inputs
    pub fn resolve(
        explicit_override: Option<ThemeVariant>,
        system_preference: Option<ThemeVariant>,
        respect_system_preference: bool,
    ) -> Self {
        let active = explicit_override
            .or(system_preference.filter(|_| respect_system_preference))
            .unwrap_or(ThemeVariant::Light);
        Self {
            active,
            explicit_override,
            system_preference,
        }
    }
}

/// Owner of the active theme
pub struct ThemeResolver {
    bundle: ThemeBundle,
    options: ThemeOptions,
    state: ThemeState,
    listeners: SlotMap<SubscriptionId, ThemeListener>,
}

impl ThemeResolver {
    /// Resolve the initial theme from `options` and the current system preference
    pub fn new(options: ThemeOptions, system: &dyn SystemPreference) -> Self {
        Self::with_bundle(ThemeBundle::default(), options, system)
    }

    /// Like [`ThemeResolver::new`] with a custom light/dark pair
    pub fn with_bundle(
        bundle: ThemeBundle,
        options: ThemeOptions,
        system: &dyn SystemPreference,
    ) -> Self {
        let state = ThemeState::resolve(
            options.initial,
            system.current(),
            options.respect_system_preference,
        );
        tracing::debug!(
            bundle = bundle.name,
            active = %state.active,
            fixed = options.initial.is_some(),
            system = ?state.system_preference,
            "theme resolver initialized"
        );
        Self {
            bundle,
            options,
            state,
            listeners: SlotMap::with_key(),
        }
    }

    pub fn options(&self) -> ThemeOptions {
        self.options
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// The active variant
    pub fn variant(&self) -> ThemeVariant {
        self.state.active
    }

    pub fn is_dark(&self) -> bool {
        self.tokens().is_dark
    }

    /// The active token set
    pub fn tokens(&self) -> &'static TokenSet {
        self.bundle.for_variant(self.state.active)
    }

    /// Select `variant` explicitly; later system preference changes are ignored
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.state.explicit_override = Some(variant);
        self.activate(variant);
    }

    /// Switch to the opposite variant
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.state.active.toggle());
    }

    /// Feed a platform appearance change into the resolver
    ///
    /// Ignored when a fixed initial theme was configured, when the system
    /// preference is not respected, or once the user picked a theme.
    pub fn on_system_preference_changed(&mut self, preference: Option<ThemeVariant>) {
        self.state.system_preference = preference;

        if self.options.initial.is_some()
            || !self.options.respect_system_preference
            || self.state.explicit_override.is_some()
        {
            tracing::trace!(?preference, "system preference change ignored");
            return;
        }
        if let Some(variant) = preference {
            self.activate(variant);
        }
    }

    /// Register a callback invoked once per theme change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a subscriber; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn activate(&mut self, variant: ThemeVariant) {
        if self.state.active == variant {
            return;
        }
        tracing::debug!(from = %self.state.active, to = %variant, "switching theme");
        self.state.active = variant;

        let change = ThemeChange {
            variant,
            tokens: self.tokens(),
        };
        for listener in self.listeners.values_mut() {
            listener(&change);
        }
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("bundle", &self.bundle.name)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::FixedPreference;

    #[test]
    fn test_resolution_rule() {
        use ThemeVariant::*;
        assert_eq!(ThemeState::resolve(None, None, true).active, Light);
        assert_eq!(ThemeState::resolve(None, Some(Dark), true).active, Dark);
        assert_eq!(ThemeState::resolve(None, Some(Dark), false).active, Light);
        assert_eq!(ThemeState::resolve(Some(Light), Some(Dark), true).active, Light);
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let mut resolver = ThemeResolver::new(ThemeOptions::default(), &FixedPreference::unknown());
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        resolver.subscribe(move |_| counter.set(counter.get() + 1));

        resolver.set_theme(ThemeVariant::Light);
        assert_eq!(calls.get(), 0);
        assert_eq!(resolver.state().explicit_override, Some(ThemeVariant::Light));

        resolver.set_theme(ThemeVariant::Dark);
        resolver.set_theme(ThemeVariant::Dark);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut resolver = ThemeResolver::new(ThemeOptions::default(), &FixedPreference::unknown());
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        let id = resolver.subscribe(move |_| counter.set(counter.get() + 1));

        resolver.toggle_theme();
        assert!(resolver.unsubscribe(id));
        assert!(!resolver.unsubscribe(id));
        resolver.toggle_theme();

        assert_eq!(calls.get(), 1);
        assert_eq!(resolver.subscriber_count(), 0);
    }
}
