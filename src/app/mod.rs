//! Application state and the view lifecycle.
//!
//! The [`App`] owns exactly one [`MountedView`] at a time. Navigating replaces
//! it: the old view (with its session and breath timer) is dropped and the new
//! one runs its mount effects. Spawned backend calls report back through the
//! message channel tagged with the [`ViewInstance`] that started them.

mod effects;
mod handlers;
mod keys;
mod messages;
mod timer;
mod types;

pub use effects::Effect;
pub use messages::AppMessage;
pub use timer::ScopedInterval;
pub use types::{Screen, ViewInstance, WellnessFocus};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use crate::adapters::ReqwestHttpClient;
use crate::backend::BackendClient;
use crate::config::ClientConfig;
use crate::view_state::{ChatView, CommunityView, WellnessView};

/// The view currently on screen, with whatever it owns.
#[derive(Debug)]
pub enum MountedView {
    Home,
    Chat {
        instance: ViewInstance,
        view: ChatView,
    },
    Community {
        instance: ViewInstance,
        view: CommunityView,
    },
    Wellness {
        instance: ViewInstance,
        view: WellnessView,
        focus: WellnessFocus,
        /// Dropping the view stops the breathing countdown
        breath_timer: ScopedInterval,
    },
}

impl MountedView {
    pub fn screen(&self) -> Screen {
        match self {
            MountedView::Home => Screen::Home,
            MountedView::Chat { .. } => Screen::Chat,
            MountedView::Community { .. } => Screen::Community,
            MountedView::Wellness { .. } => Screen::Wellness,
        }
    }

    pub fn instance(&self) -> Option<ViewInstance> {
        match self {
            MountedView::Home => None,
            MountedView::Chat { instance, .. }
            | MountedView::Community { instance, .. }
            | MountedView::Wellness { instance, .. } => Some(*instance),
        }
    }
}

/// Main application state.
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Frame ticks, drives the loading spinner
    pub tick_count: u64,
    /// Receiver for async results; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async results (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    backend: BackendClient,
    breath_period: Duration,
    view: MountedView,
    next_instance: u64,
}

impl App {
    /// Create an app on the home screen.
    pub fn new(backend: BackendClient, breath_period: Duration) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            backend,
            breath_period,
            view: MountedView::Home,
            next_instance: 0,
        }
    }

    /// Create an app talking to the configured backend over reqwest.
    pub fn from_config(config: &ClientConfig) -> Self {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout);
        let backend = BackendClient::new(config.backend_url.clone(), Arc::new(http));
        Self::new(backend, config.breath_period)
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn view(&self) -> &MountedView {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn chat_view(&self) -> Option<&ChatView> {
        match &self.view {
            MountedView::Chat { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn community_view(&self) -> Option<&CommunityView> {
        match &self.view {
            MountedView::Community { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn wellness_view(&self) -> Option<&WellnessView> {
        match &self.view {
            MountedView::Wellness { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn wellness_focus(&self) -> Option<WellnessFocus> {
        match &self.view {
            MountedView::Wellness { focus, .. } => Some(*focus),
            _ => None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the frame counter. Only redraws while a spinner is visible.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// True while the mounted view waits on a user-initiated call.
    pub fn is_busy(&self) -> bool {
        match &self.view {
            MountedView::Home => false,
            MountedView::Chat { view, .. } => view.is_loading(),
            MountedView::Community { view, .. } => view.is_loading(),
            MountedView::Wellness { view, .. } => view.is_saving(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn next_view_instance(&mut self) -> ViewInstance {
        self.next_instance += 1;
        ViewInstance(self.next_instance)
    }

    /// Unmount the current view and mount a fresh one for `screen`.
    ///
    /// Navigating to the screen already shown remounts it, which is how a
    /// view gets a new session.
    pub fn navigate(&mut self, screen: Screen) {
        info!("navigate {:?} -> {:?}", self.screen(), screen);
        // Drop first so the old breath timer is aborted before a new one starts.
        self.view = MountedView::Home;
        self.mark_dirty();

        match screen {
            Screen::Home => {}
            Screen::Chat => {
                let instance = self.next_view_instance();
                self.view = MountedView::Chat {
                    instance,
                    view: ChatView::new(),
                };
            }
            Screen::Community => {
                let instance = self.next_view_instance();
                let mut view = CommunityView::new();
                let token = view.begin_load();
                self.view = MountedView::Community { instance, view };
                self.run_effect(instance, Effect::LoadFeed(token));
            }
            Screen::Wellness => {
                let instance = self.next_view_instance();
                let mut view = WellnessView::new();
                let token = view.begin_load();
                let session_id = view.session().to_string();

                let tx = self.message_tx.clone();
                let breath_timer = ScopedInterval::spawn(self.breath_period, move || {
                    tx.send(AppMessage::BreathTick { instance }).is_ok()
                });

                self.view = MountedView::Wellness {
                    instance,
                    view,
                    focus: WellnessFocus::default(),
                    breath_timer,
                };
                self.run_effect(instance, Effect::LoadMoodHistory { session_id, token });
                self.run_effect(instance, Effect::LoadDisclaimer);
            }
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen())
            .field("instance", &self.view.instance())
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}
