//! Controller scenarios against recording view doubles.
//!
//! The content double drives a small engine model of its own (an entry list
//! and a cursor), so button state is checked against what a browser would
//! actually allow rather than against the mirror under test.

use std::cell::RefCell;

use super::*;
use webwrap_webview::{SessionHistory, TargetFrame, Traversal};

const HOME: &str = "https://example.com";
const PAGE2: &str = "https://example.com/page2";
const PAGE3: &str = "https://example.com/page3";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Load(String),
    GoBack,
    GoForward,
}

/// Session history as the engine keeps it, plus the `page_shown` report
/// the content script would post for the last move.
#[derive(Debug, Default)]
struct Engine {
    entries: Vec<String>,
    index: usize,
    /// Traversals are dropped, e.g. while the page cancels them.
    ignore_traversals: bool,
    report: Option<(String, NavigationKind)>,
}

impl Engine {
    fn navigate(&mut self, url: &str) {
        if self.entries.get(self.index).map(String::as_str) != Some(url) {
            self.entries.truncate(self.index + 1);
            self.entries.push(url.to_string());
            self.index = self.entries.len() - 1;
        }
        self.report = Some((url.to_string(), NavigationKind::Navigate));
    }

    fn go(&mut self, delta: isize) {
        if self.ignore_traversals {
            return;
        }
        let Some(target) = self.index.checked_add_signed(delta) else {
            return;
        };
        if target >= self.entries.len() {
            return;
        }
        self.index = target;
        self.report = Some((self.entries[target].clone(), NavigationKind::BackForward));
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

/// Content double: the same mirror the real view keeps, fed only by the
/// reports its engine produces.
#[derive(Default)]
struct MockContent {
    calls: Vec<Call>,
    history: SessionHistory,
    engine: RefCell<Engine>,
    fail: bool,
}

impl MockContent {
    fn loads(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ContentView for MockContent {
    fn load(&mut self, url: &str) -> Result<(), WebViewError> {
        if self.fail {
            return Err(WebViewError::Blocked(url.to_string()));
        }
        self.calls.push(Call::Load(url.to_string()));
        self.history.begin(Traversal::Load);
        self.engine.get_mut().navigate(url);
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), WebViewError> {
        self.calls.push(Call::GoBack);
        self.history.begin(Traversal::Back);
        self.engine.get_mut().go(-1);
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), WebViewError> {
        self.calls.push(Call::GoForward);
        self.history.begin(Traversal::Forward);
        self.engine.get_mut().go(1);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn navigation_finished(&mut self, url: &str, kind: NavigationKind) {
        self.history.commit(url, kind);
    }
}

#[derive(Default)]
struct MockBar {
    updates: Vec<Vec<(NavAction, bool)>>,
    statuses: Vec<Option<String>>,
}

impl NavBarView for MockBar {
    fn update_buttons(&mut self, buttons: &[NavigationButton]) -> Result<(), WebViewError> {
        self.updates
            .push(buttons.iter().map(|b| (b.on_click, b.enabled)).collect());
        Ok(())
    }

    fn show_status(&mut self, message: Option<&str>) -> Result<(), WebViewError> {
        self.statuses.push(message.map(str::to_string));
        Ok(())
    }
}

type Controller = MainViewController<MockContent, MockBar>;

fn settings(home: Option<&str>) -> ControllerSettings {
    let mut config = WebWrapConfig::default();
    config.home.url = home.map(str::to_string);
    ControllerSettings::from_config(&config)
}

fn loaded_controller(home: Option<&str>) -> Controller {
    let mut c = Controller::new(settings(home));
    c.view_did_load(MockContent::default(), MockBar::default());
    c.run_deferred();
    c.run_deferred();
    c
}

fn content(c: &Controller) -> &MockContent {
    c.content().expect("content mounted")
}

fn enabled(c: &Controller) -> (bool, bool) {
    (
        c.button(NavAction::Back).enabled,
        c.button(NavAction::Forward).enabled,
    )
}

/// Deliver the engine's pending report, if it moved at all.
fn settle(c: &mut Controller) {
    let report = content(c).engine.borrow_mut().report.take();
    if let Some((url, kind)) = report {
        c.navigation_finished(&url, kind);
    }
}

/// The user follows a link inside the page.
fn link_click(c: &mut Controller, url: &str) {
    content(c).engine.borrow_mut().navigate(url);
    settle(c);
}

/// The page calls `history.go(delta)` itself.
fn script_go(c: &mut Controller, delta: isize) {
    content(c).engine.borrow_mut().go(delta);
    settle(c);
}

fn press_and_settle(c: &mut Controller, action: NavAction) {
    c.press(action);
    settle(c);
}

fn assert_buttons_match_engine(c: &Controller) {
    let engine = content(c).engine.borrow();
    assert_eq!(
        enabled(c),
        (engine.can_go_back(), engine.can_go_forward()),
        "engine at {} of {:?}",
        engine.index,
        engine.entries
    );
}

// -----------------------------------------------------------------
// Construction
// -----------------------------------------------------------------

#[test]
fn starts_initializing_with_traversal_buttons_disabled() {
    let c = Controller::new(settings(Some(HOME)));
    assert_eq!(c.phase(), Phase::Initializing);
    assert_eq!(enabled(&c), (false, false));
    assert!(c.button(NavAction::Home).enabled);
    assert!(c.content().is_none());
}

#[test]
fn buttons_use_localized_labels_and_configured_style() {
    let mut config = WebWrapConfig::default();
    config.labels.locale = "de".into();
    config.navbar.button.color = "#3366ff".into();
    config.navbar.button.corner_radius = 4.0;
    let c = Controller::new(ControllerSettings::from_config(&config));

    let labels: Vec<&str> = c.buttons().iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Zurück", "Start", "Vor"]);
    for b in c.buttons() {
        assert_eq!(b.color, Color::from_rgba(0x33, 0x66, 0xff, 255));
        assert!((b.corner_radius - 4.0).abs() < f64::EPSILON);
    }
}

#[test]
fn buttons_are_in_bar_order() {
    let c = Controller::new(settings(None));
    let order: Vec<NavAction> = c.buttons().iter().map(|b| b.on_click).collect();
    assert_eq!(order, NavAction::ALL.to_vec());
}

// -----------------------------------------------------------------
// Deferred start
// -----------------------------------------------------------------

#[test]
fn home_load_waits_for_the_pass_after_mount() {
    let mut c = Controller::new(settings(Some(HOME)));
    c.view_did_load(MockContent::default(), MockBar::default());

    assert_eq!(c.phase(), Phase::Ready);
    assert!(c.has_deferred());
    assert!(content(&c).calls.is_empty());

    // Same pass as the mount.
    c.run_deferred();
    assert!(c.has_deferred());
    assert!(content(&c).calls.is_empty());

    c.run_deferred();
    assert!(!c.has_deferred());
    assert_eq!(content(&c).calls, vec![Call::Load(HOME.into())]);
}

#[test]
fn startup_issues_exactly_one_home_load() {
    let mut c = loaded_controller(Some(HOME));
    c.run_deferred();
    c.run_deferred();
    assert_eq!(content(&c).loads(), vec![HOME]);
    assert_eq!(enabled(&c), (false, false));
}

#[test]
fn unload_drops_queued_work() {
    let mut c = Controller::new(settings(Some(HOME)));
    c.view_did_load(MockContent::default(), MockBar::default());
    c.run_deferred();
    c.view_did_unload();
    assert!(!c.has_deferred());
}

#[test]
fn view_did_load_pushes_initial_bar_state() {
    let c = loaded_controller(Some(HOME));
    let bar = c.bar().unwrap();
    assert_eq!(
        bar.updates.first().unwrap(),
        &vec![
            (NavAction::Back, false),
            (NavAction::Home, true),
            (NavAction::Forward, false)
        ]
    );
}

#[test]
fn second_mount_is_ignored() {
    let mut c = loaded_controller(Some(HOME));
    let mut other = MockContent::default();
    other.calls.push(Call::GoBack);
    c.view_did_load(other, MockBar::default());
    c.run_deferred();
    c.run_deferred();
    assert_eq!(content(&c).calls, vec![Call::Load(HOME.into())]);
}

#[test]
fn missing_home_url_loads_nothing() {
    let mut c = loaded_controller(None);
    assert!(content(&c).calls.is_empty());

    c.press(NavAction::Home);
    assert!(content(&c).calls.is_empty());
    assert!(c.status().is_none());
}

// -----------------------------------------------------------------
// Navigation finished
// -----------------------------------------------------------------

#[test]
fn first_finish_moves_to_loaded() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    assert_eq!(c.phase(), Phase::Loaded);
    assert_eq!(enabled(&c), (false, false));
}

#[test]
fn link_navigation_enables_back_only() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);
    assert_eq!(enabled(&c), (true, false));
    assert_buttons_match_engine(&c);
}

#[test]
fn back_then_finish_enables_forward_only() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);

    c.press(NavAction::Back);
    assert_eq!(content(&c).calls.last(), Some(&Call::GoBack));
    // Nothing changes until the engine reports back.
    assert_eq!(enabled(&c), (true, false));

    settle(&mut c);
    assert_eq!(enabled(&c), (false, true));
    assert_buttons_match_engine(&c);
}

#[test]
fn forward_returns_to_later_page() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);
    press_and_settle(&mut c, NavAction::Back);

    c.press(NavAction::Forward);
    assert_eq!(content(&c).calls.last(), Some(&Call::GoForward));
    settle(&mut c);
    assert_eq!(enabled(&c), (true, false));
    assert_buttons_match_engine(&c);
}

#[test]
fn link_back_to_previous_page_is_a_new_entry() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);

    // A link on PAGE2 that points at HOME: the engine pushes, it does not go back.
    link_click(&mut c, HOME);
    assert_eq!(content(&c).engine.borrow().entries, vec![HOME, PAGE2, HOME]);
    assert_eq!(enabled(&c), (true, false));
    assert_buttons_match_engine(&c);

    press_and_settle(&mut c, NavAction::Back);
    assert_eq!(enabled(&c), (true, true));
    assert_buttons_match_engine(&c);
}

#[test]
fn ignored_forward_does_not_leak_into_next_link() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);
    press_and_settle(&mut c, NavAction::Back);
    assert_eq!(enabled(&c), (false, true));

    content(&c).engine.borrow_mut().ignore_traversals = true;
    press_and_settle(&mut c, NavAction::Forward);
    assert_eq!(content(&c).calls.last(), Some(&Call::GoForward));
    assert_eq!(enabled(&c), (false, true));

    link_click(&mut c, PAGE3);
    assert_eq!(content(&c).engine.borrow().entries, vec![HOME, PAGE3]);
    assert_eq!(enabled(&c), (true, false));
    assert_buttons_match_engine(&c);
}

#[test]
fn script_traversal_is_followed() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);
    link_click(&mut c, PAGE3);

    script_go(&mut c, -2);
    assert_eq!(enabled(&c), (false, true));
    assert_buttons_match_engine(&c);

    script_go(&mut c, 1);
    assert_eq!(enabled(&c), (true, true));
    assert_buttons_match_engine(&c);
}

#[test]
fn finish_refreshes_bar() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);
    let last = c.bar().unwrap().updates.last().unwrap().clone();
    assert_eq!(
        last,
        vec![
            (NavAction::Back, true),
            (NavAction::Home, true),
            (NavAction::Forward, false)
        ]
    );
}

#[test]
fn finish_before_mount_is_ignored() {
    let mut c = Controller::new(settings(Some(HOME)));
    c.navigation_finished(HOME, NavigationKind::Navigate);
    assert_eq!(c.phase(), Phase::Initializing);
}

enum Step {
    Link(&'static str),
    Press(NavAction),
    Script(isize),
}

#[test]
fn buttons_track_engine_over_mixed_sequence() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    assert_buttons_match_engine(&c);

    let steps = [
        Step::Link(PAGE2),
        Step::Link(PAGE3),
        Step::Press(NavAction::Back),
        Step::Press(NavAction::Back),
        Step::Press(NavAction::Forward),
        Step::Press(NavAction::Home),
        Step::Press(NavAction::Back),
        Step::Link(PAGE3),
        Step::Press(NavAction::Back),
        Step::Script(-1),
        Step::Link(PAGE2),
        Step::Link(HOME),
        Step::Press(NavAction::Back),
    ];
    for step in steps {
        match step {
            Step::Link(url) => link_click(&mut c, url),
            Step::Press(action) => press_and_settle(&mut c, action),
            Step::Script(delta) => script_go(&mut c, delta),
        }
        assert_buttons_match_engine(&c);
    }
    // HOME, PAGE2, HOME with the cursor on PAGE2
    assert_eq!(enabled(&c), (true, true));
}

// -----------------------------------------------------------------
// Button presses
// -----------------------------------------------------------------

#[test]
fn disabled_back_and_forward_are_no_ops() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    let before = content(&c).calls.len();

    c.press(NavAction::Back);
    c.press(NavAction::Forward);
    assert_eq!(content(&c).calls.len(), before);
}

#[test]
fn home_always_loads_home() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);
    link_click(&mut c, PAGE2);
    press_and_settle(&mut c, NavAction::Back);

    // Back disabled, forward enabled: Home still loads.
    c.press(NavAction::Home);
    assert_eq!(content(&c).calls.last(), Some(&Call::Load(HOME.into())));
    settle(&mut c);
    assert_buttons_match_engine(&c);

    press_and_settle(&mut c, NavAction::Home);
    assert_eq!(content(&c).loads(), vec![HOME, HOME, HOME]);
    assert_buttons_match_engine(&c);
}

#[test]
fn press_before_mount_does_nothing() {
    let mut c = Controller::new(settings(Some(HOME)));
    c.press(NavAction::Home);
    assert!(c.content().is_none());
    assert!(c.status().is_none());
}

#[test]
fn failed_load_is_surfaced_in_status() {
    let mut c = Controller::new(settings(Some(HOME)));
    let failing = MockContent {
        fail: true,
        ..Default::default()
    };
    c.view_did_load(failing, MockBar::default());
    c.run_deferred();
    c.run_deferred();

    let status = c.status().expect("status set");
    assert!(status.contains(HOME));
    let bar = c.bar().unwrap();
    assert_eq!(bar.statuses.last().unwrap().as_deref(), Some(status));
}

#[test]
fn successful_finish_clears_status() {
    let mut c = loaded_controller(Some(HOME));
    c.navigation_blocked("file:///etc/passwd");
    assert!(c.status().unwrap().contains("file:///etc/passwd"));

    settle(&mut c);
    assert!(c.status().is_none());
    assert_eq!(c.bar().unwrap().statuses.last(), Some(&None));
}

// -----------------------------------------------------------------
// Popups
// -----------------------------------------------------------------

#[test]
fn new_window_request_loads_into_existing_view() {
    let mut c = loaded_controller(Some(HOME));
    settle(&mut c);

    c.popup_requested(&PopupRequest::new_window(PAGE2));
    assert_eq!(content(&c).calls.last(), Some(&Call::Load(PAGE2.into())));

    settle(&mut c);
    assert_eq!(enabled(&c), (true, false));
    assert_buttons_match_engine(&c);
}

#[test]
fn subframe_popup_is_redirected() {
    let mut c = loaded_controller(Some(HOME));
    c.popup_requested(&PopupRequest {
        url: Some(PAGE3.into()),
        target: TargetFrame::Subframe,
    });
    assert_eq!(content(&c).calls.last(), Some(&Call::Load(PAGE3.into())));
}

#[test]
fn main_frame_and_urlless_popups_are_declined() {
    let mut c = loaded_controller(Some(HOME));
    let before = content(&c).calls.len();

    c.popup_requested(&PopupRequest {
        url: Some(PAGE2.into()),
        target: TargetFrame::MainFrame,
    });
    c.popup_requested(&PopupRequest {
        url: None,
        target: TargetFrame::None,
    });
    assert_eq!(content(&c).calls.len(), before);
}

// -----------------------------------------------------------------
// Bar lifecycle
// -----------------------------------------------------------------

#[test]
fn bar_ready_resends_state() {
    let mut c = loaded_controller(Some(HOME));
    let before = c.bar().unwrap().updates.len();
    c.bar_ready();
    assert_eq!(c.bar().unwrap().updates.len(), before + 1);
}

#[test]
fn unload_returns_to_initializing() {
    let mut c = loaded_controller(Some(HOME));
    c.view_did_unload();
    assert_eq!(c.phase(), Phase::Initializing);
    assert!(c.content().is_none());
    assert!(c.bar().is_none());
}
