//! Main view controller.
//!
//! Owns the navigation buttons and the two views, and turns bar clicks and
//! content notifications into navigation instructions.
//!
//! Lifecycle: `Initializing` until [`MainViewController::view_did_load`]
//! mounts the views, `Ready` once the home load is queued, `Loaded` after the
//! first navigation settles. The home load itself runs from
//! [`MainViewController::run_deferred`] on the second event-loop pass after
//! the mount, so the pass that attached the views finishes first.

use std::collections::VecDeque;

use tracing::{debug, error, info, warn};

use webwrap_common::{Color, NavAction};
use webwrap_config::{Strings, WebWrapConfig};
use webwrap_webview::{
    make_button, ButtonOptions, ContentView, NavBarView, NavigationButton, NavigationKind,
    PopupRequest, WebViewError,
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Views not mounted yet.
    Initializing,
    /// Views mounted, home load issued or queued.
    Ready,
    /// At least one navigation has finished.
    Loaded,
}

/// Work queued for a later event-loop pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    LoadHome,
}

/// Everything the controller needs from configuration.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub home_url: Option<String>,
    pub strings: Strings,
    /// Styling applied to all three buttons; the label is replaced per button.
    pub button_style: ButtonOptions,
}

impl ControllerSettings {
    pub fn from_config(config: &WebWrapConfig) -> Self {
        let style = &config.navbar.button;
        let defaults = ButtonOptions::default();
        Self {
            home_url: config.home.url().map(str::to_string),
            strings: Strings::from_config(&config.labels),
            button_style: ButtonOptions {
                label: defaults.label,
                color: Color::from_hex(&style.color).unwrap_or(defaults.color),
                corner_radius: style.corner_radius,
                text_color: Color::from_hex(&style.text_color).unwrap_or(defaults.text_color),
            },
        }
    }
}

pub struct MainViewController<C, N> {
    phase: Phase,
    home_url: Option<String>,
    /// Back, Home, Forward, in `NavAction::ALL` order.
    buttons: [NavigationButton; 3],
    content: Option<C>,
    bar: Option<N>,
    /// Queued during the current pass.
    deferred: VecDeque<DeferredTask>,
    /// Queued during the previous pass; runs on the next `run_deferred`.
    due: VecDeque<DeferredTask>,
    status: Option<String>,
}

impl<C: ContentView, N: NavBarView> MainViewController<C, N> {
    pub fn new(settings: ControllerSettings) -> Self {
        let ControllerSettings {
            home_url,
            strings,
            button_style,
        } = settings;

        let buttons = NavAction::ALL.map(|action| {
            let mut button = make_button(
                ButtonOptions {
                    label: strings.label(action).to_string(),
                    ..button_style.clone()
                },
                action,
            );
            // Nothing to traverse until the first page settles.
            button.set_enabled(!action.is_history_traversal());
            button
        });

        Self {
            phase: Phase::Initializing,
            home_url,
            buttons,
            content: None,
            bar: None,
            deferred: VecDeque::new(),
            due: VecDeque::new(),
            status: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn buttons(&self) -> &[NavigationButton] {
        &self.buttons
    }

    pub fn button(&self, action: NavAction) -> &NavigationButton {
        &self.buttons[Self::slot(action)]
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn bar(&self) -> Option<&N> {
        self.bar.as_ref()
    }

    #[cfg(test)]
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty() || !self.due.is_empty()
    }

    /// Mount the views and queue the home load. Only the first call has effect.
    pub fn view_did_load(&mut self, content: C, bar: N) {
        if self.phase != Phase::Initializing {
            warn!(phase = ?self.phase, "views already mounted, ignoring remount");
            return;
        }

        self.content = Some(content);
        self.bar = Some(bar);
        self.phase = Phase::Ready;
        self.deferred.push_back(DeferredTask::LoadHome);
        self.push_bar_state();
        info!(home = ?self.home_url, "main view loaded");
    }

    /// Drop the views, e.g. on shutdown. The controller returns to `Initializing`.
    pub fn view_did_unload(&mut self) {
        self.content = None;
        self.bar = None;
        self.deferred.clear();
        self.due.clear();
        self.phase = Phase::Initializing;
    }

    /// Called once per event-loop pass. Runs the tasks queued before the
    /// previous pass, then promotes the ones queued since.
    pub fn run_deferred(&mut self) {
        while let Some(task) = self.due.pop_front() {
            match task {
                DeferredTask::LoadHome => self.load_home(),
            }
        }
        self.due.append(&mut self.deferred);
    }

    /// The bar's script has (re)started and lost its state.
    pub fn bar_ready(&mut self) {
        self.push_bar_state();
    }

    /// A main-frame document was shown at `url`, reached by `kind`.
    pub fn navigation_finished(&mut self, url: &str, kind: NavigationKind) {
        let Some(content) = self.content.as_mut() else {
            debug!(url, "navigation finished before views were mounted");
            return;
        };

        content.navigation_finished(url, kind);
        let back = content.can_go_back();
        let forward = content.can_go_forward();

        self.buttons[Self::slot(NavAction::Back)].set_enabled(back);
        self.buttons[Self::slot(NavAction::Forward)].set_enabled(forward);
        self.phase = Phase::Loaded;
        self.status = None;
        debug!(url, ?kind, back, forward, "navigation buttons refreshed");
        self.push_bar_state();
    }

    /// A bar button was clicked.
    pub fn press(&mut self, action: NavAction) {
        if action.is_history_traversal() && !self.button(action).enabled {
            debug!(?action, "ignoring press on disabled button");
            return;
        }

        let result = match action {
            NavAction::Home => {
                self.load_home();
                return;
            }
            NavAction::Back => self.content.as_mut().map(|c| c.go_back()),
            NavAction::Forward => self.content.as_mut().map(|c| c.go_forward()),
        };

        match result {
            Some(Ok(())) => {}
            Some(Err(e)) => self.report(action.key(), &e),
            None => debug!(?action, "press before views were mounted"),
        }
    }

    /// The page asked for a new window or tab. Its URL is loaded into the
    /// existing content view; no second view is ever created.
    pub fn popup_requested(&mut self, request: &PopupRequest) {
        let Some(url) = request.redirect_url() else {
            debug!(?request, "popup request declined");
            return;
        };
        let Some(content) = self.content.as_mut() else {
            return;
        };

        info!(url, "redirecting popup into the content view");
        if let Err(e) = content.load(url) {
            self.report("popup", &e);
        }
    }

    /// The allowlist refused a navigation the page attempted.
    pub fn navigation_blocked(&mut self, url: &str) {
        self.set_status(Some(format!("Blocked navigation to {url}")));
    }

    fn load_home(&mut self) {
        let Some(url) = self.home_url.as_deref() else {
            debug!("no home URL configured, nothing to load");
            return;
        };
        let Some(content) = self.content.as_mut() else {
            debug!("home load requested before views were mounted");
            return;
        };

        if let Err(e) = content.load(url) {
            let url = url.to_string();
            self.report(&url, &e);
        }
    }

    fn report(&mut self, what: &str, err: &WebViewError) {
        error!(what, error = %err, "navigation instruction failed");
        self.set_status(Some(format!("Could not navigate ({what}): {err}")));
    }

    fn set_status(&mut self, status: Option<String>) {
        self.status = status;
        if let Some(bar) = self.bar.as_mut() {
            if let Err(e) = bar.show_status(self.status.as_deref()) {
                warn!(error = %e, "failed to update bar status");
            }
        }
    }

    fn push_bar_state(&mut self) {
        let Some(bar) = self.bar.as_mut() else {
            return;
        };
        if let Err(e) = bar.update_buttons(&self.buttons) {
            warn!(error = %e, "failed to update bar buttons");
        }
        if let Err(e) = bar.show_status(self.status.as_deref()) {
            warn!(error = %e, "failed to update bar status");
        }
    }

    fn slot(action: NavAction) -> usize {
        match action {
            NavAction::Back => 0,
            NavAction::Home => 1,
            NavAction::Forward => 2,
        }
    }
}
