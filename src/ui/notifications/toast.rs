// SPDX-License-Identifier: MPL-2.0
//! Toast dispatch.
//!
//! A [`ToastRequest`] carries an optional title and description plus a
//! presentation [`Variant`]. The [`ToastDispatcher`] folds title and
//! description into one line and hands it to a [`Notifier`], picking the
//! error entry point for destructive toasts and the success entry point for
//! everything else.

use super::manager::Manager;
use crate::config::NotificationsConfig;
use crate::domain::notifications::default_toast_duration;
use std::time::Duration;

/// Presentation mode of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Regular feedback, shown with success styling.
    #[default]
    Default,
    /// Something failed, shown with error styling.
    Destructive,
}

/// Options passed along with the message to a [`Notifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    /// How long the toast stays on screen.
    pub duration: Duration,
}

/// A request to show one toast.
///
/// Unset fields fall back to defaults when dispatched: `variant` to
/// [`Variant::Default`], `duration` to the dispatcher's default (3 seconds
/// unless configured otherwise).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<Variant>,
    pub duration: Option<Duration>,
}

impl ToastRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Shorthand for `variant(Variant::Destructive)`.
    #[must_use]
    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the line shown to the user.
    ///
    /// `"<title>: <description>"` when both are present, otherwise whichever
    /// one is present, otherwise an empty string. Empty strings count as
    /// absent.
    #[must_use]
    pub fn message(&self) -> String {
        let title = self.title.as_deref().filter(|t| !t.is_empty());
        let description = self.description.as_deref().filter(|d| !d.is_empty());

        match (title, description) {
            (Some(title), Some(description)) => format!("{title}: {description}"),
            (Some(text), None) | (None, Some(text)) => text.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Backend that actually presents toasts.
///
/// Mirrors the two entry points of a toast library: one for success
/// styling and one for error styling.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Shows `message` with success styling.
    fn success(&mut self, message: &str, options: ToastOptions);

    /// Shows `message` with error styling.
    fn error(&mut self, message: &str, options: ToastOptions);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn success(&mut self, message: &str, options: ToastOptions) {
        (**self).success(message, options);
    }

    fn error(&mut self, message: &str, options: ToastOptions) {
        (**self).error(message, options);
    }
}

/// Formats toast requests and routes them to a [`Notifier`].
#[derive(Debug)]
pub struct ToastDispatcher<N> {
    notifier: N,
    default_duration: Duration,
}

impl<N: Notifier> ToastDispatcher<N> {
    /// Binds a dispatcher to `notifier`, using the 3 second default duration.
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            notifier,
            default_duration: default_toast_duration(),
        }
    }

    /// Overrides the duration applied to requests without one.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Returns the duration applied to requests without one.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Shows one toast.
    ///
    /// [`Variant::Destructive`] goes to [`Notifier::error`]; every other
    /// variant goes to [`Notifier::success`]. An explicit duration is passed
    /// through unchanged.
    pub fn toast(&mut self, request: ToastRequest) {
        let variant = request.variant.unwrap_or_default();
        let options = ToastOptions {
            duration: request.duration.unwrap_or(self.default_duration),
        };
        let message = request.message();

        tracing::debug!(
            ?variant,
            duration_ms = options.duration.as_millis() as u64,
            "dispatching toast"
        );

        match variant {
            Variant::Destructive => self.notifier.error(&message, options),
            Variant::Default => self.notifier.success(&message, options),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }
}

impl ToastDispatcher<Manager> {
    /// Builds a dispatcher over a [`Manager`] configured from settings.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self::with_notifier(Manager::with_max_visible(config.max_visible()))
            .with_default_duration(config.default_duration())
    }
}

/// Returns a dispatcher bound to a fresh in-process notification [`Manager`].
#[must_use]
pub fn make_toast_dispatcher() -> ToastDispatcher<Manager> {
    ToastDispatcher::with_notifier(Manager::new())
}
