//! 3D viewer lifecycle state machine.
//!
//! The external 3D/AR viewer embed loads the model asset asynchronously and
//! reports completion through load/error signals. This component tracks that
//! lifecycle per model URL:
//!
//! ```text
//! LOADING ──success──▶ READY
//!    └──────failure──▶ ERROR
//! ```
//!
//! Both outcomes are terminal for a given model URL; only remounting with a
//! new URL returns to LOADING. Every load start issues a fresh [`LoadToken`];
//! a completion signal carrying any other token belongs to a superseded load
//! and is ignored, so a slow old asset can never clobber the state of the
//! model currently mounted.
//!
//! Orthogonal to load state, the component tracks a user-controlled
//! presentation mode (3D view versus AR info) and a fullscreen flag kept in
//! sync with the host environment's fullscreen-change notifications.

use crate::events::{Event, EventHandler, EventType};
use crate::material::ModelSettings;

/// Identifies which load attempt a completion signal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

/// Load lifecycle state of the mounted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The asset load is in flight.
    Loading,
    /// The viewer reported a successful load. Terminal.
    Ready,
    /// The viewer reported a load failure. Terminal, no automatic retry.
    Error,
}

/// User-controlled presentation mode, independent of load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Interactive 3D view.
    View3d,
    /// AR information panel.
    ArInfo,
}

/// What the component should currently display.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerView {
    /// Loading indicator.
    Loading,
    /// The loaded model.
    Ready {
        /// Viewer settings for the mounted model.
        settings: ModelSettings,
        /// Active presentation mode.
        presentation: PresentationMode,
        /// Whether the surrounding element is fullscreen.
        fullscreen: bool,
    },
    /// Dedicated failure view, distinct from loading and ready.
    Failed,
}

/// Lifecycle state for one mounted 3D viewer instance.
///
/// Each material's viewer owns its state exclusively; nothing is shared
/// across materials.
#[derive(Debug)]
pub struct ModelViewer {
    settings: ModelSettings,
    token: LoadToken,
    state: LoadState,
    presentation: PresentationMode,
    fullscreen: bool,
}

impl ModelViewer {
    /// Mounts a viewer for the given model. Initial state is always
    /// LOADING with presentation defaulting to the 3D view.
    #[must_use]
    pub fn mount(settings: ModelSettings) -> Self {
        log::debug!("mounting 3D viewer for {}", settings.url);
        Self {
            settings,
            token: LoadToken(0),
            state: LoadState::Loading,
            presentation: PresentationMode::View3d,
            fullscreen: false,
        }
    }

    /// The token identifying the in-flight (or last) load attempt. The embed
    /// integration captures this at load start and passes it back with the
    /// completion signal.
    #[must_use]
    pub const fn load_token(&self) -> LoadToken {
        self.token
    }

    /// Current load state.
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Current presentation mode.
    #[must_use]
    pub const fn presentation(&self) -> PresentationMode {
        self.presentation
    }

    /// Whether the host reports the viewer as fullscreen.
    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Settings of the mounted model.
    #[must_use]
    pub const fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Remounts with a new model URL: issues a fresh token and returns to
    /// LOADING. Presentation mode and fullscreen status are orthogonal and
    /// survive the remount. Signals for the previous URL become stale.
    pub fn set_model_url(&mut self, url: impl Into<String>) {
        self.settings.url = url.into();
        self.token = LoadToken(self.token.0 + 1);
        self.state = LoadState::Loading;
        log::debug!(
            "remounted 3D viewer for {} (token {})",
            self.settings.url,
            self.token.0
        );
    }

    /// Applies a load completion signal. Stale tokens and signals arriving
    /// after a terminal state are ignored.
    pub fn finish_load(&mut self, token: LoadToken, success: bool) {
        if token != self.token {
            log::debug!(
                "ignoring stale load signal (token {} != current {})",
                token.0,
                self.token.0
            );
            return;
        }
        if self.state != LoadState::Loading {
            return;
        }
        self.state = if success {
            LoadState::Ready
        } else {
            log::warn!("3D asset failed to load: {}", self.settings.url);
            LoadState::Error
        };
    }

    /// Toggles between the 3D view and the AR info panel. No-op when AR is
    /// disabled for this model; never affects load state.
    pub fn toggle_presentation(&mut self) {
        if !self.settings.ar_enabled {
            return;
        }
        self.presentation = match self.presentation {
            PresentationMode::View3d => PresentationMode::ArInfo,
            PresentationMode::ArInfo => PresentationMode::View3d,
        };
    }

    /// Synchronizes the fullscreen flag from a host fullscreen-change
    /// notification. Independent of load state.
    pub fn set_fullscreen(&mut self, active: bool) {
        self.fullscreen = active;
    }

    /// The view to display for the current state.
    #[must_use]
    pub fn view(&self) -> ViewerView {
        match self.state {
            LoadState::Loading => ViewerView::Loading,
            LoadState::Ready => ViewerView::Ready {
                settings: self.settings.clone(),
                presentation: self.presentation,
                fullscreen: self.fullscreen,
            },
            LoadState::Error => ViewerView::Failed,
        }
    }
}

impl EventHandler for ModelViewer {
    fn on_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            EventType::ModelLoaded => {
                if let Some(token) = event.get_load_token() {
                    self.finish_load(LoadToken(token), true);
                    return true;
                }
                false
            }
            EventType::ModelLoadFailed => {
                if let Some(token) = event.get_load_token() {
                    self.finish_load(LoadToken(token), false);
                    return true;
                }
                false
            }
            EventType::FullscreenChanged => {
                if let Some(active) = event.get_active() {
                    self.set_fullscreen(active);
                    return true;
                }
                false
            }
            _ => false,
        }
    }
}

impl LoadToken {
    /// Raw generation value, for embedding in events.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Reconstructs a token received from an event.
    #[must_use]
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventArg;

    fn glb(url: &str) -> ModelSettings {
        ModelSettings {
            url: url.to_string(),
            scale: 1.0,
            ar_enabled: true,
        }
    }

    #[test]
    fn test_mount_starts_loading() {
        let viewer = ModelViewer::mount(glb("a.glb"));
        assert_eq!(viewer.state(), LoadState::Loading);
        assert_eq!(viewer.presentation(), PresentationMode::View3d);
        assert_eq!(viewer.view(), ViewerView::Loading);
    }

    #[test]
    fn test_successful_load_reaches_ready() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        let token = viewer.load_token();
        viewer.finish_load(token, true);
        assert_eq!(viewer.state(), LoadState::Ready);
    }

    #[test]
    fn test_failed_load_shows_dedicated_failure_view() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        let token = viewer.load_token();
        viewer.finish_load(token, false);
        assert_eq!(viewer.state(), LoadState::Error);
        assert_eq!(viewer.view(), ViewerView::Failed);
    }

    #[test]
    fn test_stale_signal_from_previous_url_ignored() {
        let mut viewer = ModelViewer::mount(glb("old.glb"));
        let stale = viewer.load_token();
        viewer.set_model_url("a.glb");

        // The old load's failure signal arrives late.
        viewer.finish_load(stale, false);
        assert_eq!(viewer.state(), LoadState::Loading);

        // The current load completes normally.
        viewer.finish_load(viewer.load_token(), true);
        assert_eq!(viewer.state(), LoadState::Ready);
    }

    #[test]
    fn test_terminal_states_ignore_further_signals() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        let token = viewer.load_token();
        viewer.finish_load(token, true);
        viewer.finish_load(token, false);
        assert_eq!(viewer.state(), LoadState::Ready);
    }

    #[test]
    fn test_remount_returns_to_loading() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        viewer.finish_load(viewer.load_token(), false);
        viewer.set_model_url("b.glb");
        assert_eq!(viewer.state(), LoadState::Loading);
        assert_eq!(viewer.settings().url, "b.glb");
    }

    #[test]
    fn test_presentation_toggle_independent_of_load_state() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        viewer.toggle_presentation();
        assert_eq!(viewer.presentation(), PresentationMode::ArInfo);
        assert_eq!(viewer.state(), LoadState::Loading);
        viewer.toggle_presentation();
        assert_eq!(viewer.presentation(), PresentationMode::View3d);
    }

    #[test]
    fn test_presentation_toggle_noop_when_ar_disabled() {
        let mut settings = glb("a.glb");
        settings.ar_enabled = false;
        let mut viewer = ModelViewer::mount(settings);
        viewer.toggle_presentation();
        assert_eq!(viewer.presentation(), PresentationMode::View3d);
    }

    #[test]
    fn test_fullscreen_tracks_host_independent_of_load_state() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        viewer.set_fullscreen(true);
        assert!(viewer.is_fullscreen());
        assert_eq!(viewer.state(), LoadState::Loading);

        viewer.finish_load(viewer.load_token(), false);
        viewer.set_fullscreen(false);
        assert!(!viewer.is_fullscreen());
        assert_eq!(viewer.state(), LoadState::Error);
    }

    #[test]
    fn test_load_signals_arrive_as_events() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        let token = viewer.load_token().value();

        let event = Event::new(EventType::ModelLoaded, 0.0)
            .with_arg("token", EventArg::Token(token));
        assert!(viewer.on_event(&event));
        assert_eq!(viewer.state(), LoadState::Ready);
    }

    #[test]
    fn test_fullscreen_event_updates_flag() {
        let mut viewer = ModelViewer::mount(glb("a.glb"));
        let event = Event::new(EventType::FullscreenChanged, 0.0)
            .with_arg("active", EventArg::Active(true));
        assert!(viewer.on_event(&event));
        assert!(viewer.is_fullscreen());
    }
}
