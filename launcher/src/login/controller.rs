//! Login submission state machine.
//!
//! Owns the field buffers, the validity flags, the auth mode and the
//! submission state. Collaborators are reached through the [`LoginPorts`]
//! bundle, so every transition can be driven in tests without a rendering
//! environment. Remote authentication is the one async collaborator: the
//! app layer runs it and feeds the outcome back via [`remote_result`].
//!
//! [`remote_result`]: LoginController::remote_result

use std::time::{Duration, Instant};

use ember_types::Account;

use crate::accounts::StoreError;
use crate::api::ApiError;
use crate::lang;
use crate::login::offline;
use crate::login::validation::{self, FieldError, FieldStatus};
use crate::views::View;

/// Store of known accounts.
///
/// Mutation goes through an explicit upsert; the controller never edits a
/// collaborator's internal map in place.
pub trait AccountStore {
    fn upsert(&mut self, account: Account);
    fn set_selected(&mut self, id: &str);
    fn persist(&mut self) -> Result<(), StoreError>;
}

/// Receives the "selected account changed" notification.
pub trait AccountEvents {
    fn selected_changed(&mut self, account: &Account);
}

/// Performs the visual transition between two views.
pub trait ViewNavigator {
    fn switch_view(&mut self, from: View, to: View, out_ms: u32, in_ms: u32);
}

/// Presents a modal overlay with a single dismiss action.
pub trait OverlayPort {
    fn show(&mut self, title: String, desc: String, action_label: String);
}

/// Collaborators the controller drives during a submission.
pub struct LoginPorts<'a> {
    pub accounts: &'a mut dyn AccountStore,
    pub events: &'a mut dyn AccountEvents,
    pub navigator: &'a mut dyn ViewNavigator,
    pub overlay: &'a mut dyn OverlayPort,
}

/// Which authentication flow a submission takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Delegate to the remote account service.
    #[default]
    Online,
    /// Synthesize a local pseudo-identity; no remote call, no password.
    Offline,
}

/// Where one login attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    /// Submit accepted. The offline path waits out the simulated latency
    /// here; the online path waits for the remote result.
    Submitting { since: Instant, mode: AuthMode },
    /// Success indicator showing, pausing before navigating away.
    Succeeded { since: Instant },
    /// View switch requested, waiting for the transition to complete.
    Navigating,
    /// The attempt failed; resolved by correcting input and resubmitting.
    Failed,
}

/// What the app layer has to do after an accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDispatch {
    /// Submission rejected (validation failed or one is already in flight).
    Blocked,
    /// Offline flow started; `tick` completes it after the latency delay.
    Offline,
    /// Online flow started; run the remote login with these credentials
    /// and feed the outcome to `remote_result`.
    Online { username: String, password: String },
}

/// Pacing delays around a submission.
///
/// Perceived-latency hints, not correctness requirements; tests run them
/// at zero.
#[derive(Debug, Clone, Copy)]
pub struct LoginTiming {
    /// Pause before the offline path completes, simulating a round trip.
    pub submit_delay: Duration,
    /// How long the success indicator stays up before navigating away.
    pub success_delay: Duration,
    /// View transition fade-out, in milliseconds.
    pub view_out_ms: u32,
    /// View transition fade-in, in milliseconds.
    pub view_in_ms: u32,
}

impl Default for LoginTiming {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(500),
            success_delay: Duration::from_millis(1000),
            view_out_ms: crate::views::VIEW_FADE_MS,
            view_in_ms: crate::views::VIEW_FADE_MS,
        }
    }
}

impl LoginTiming {
    /// All delays at zero, for tests.
    pub fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            success_delay: Duration::ZERO,
            view_out_ms: 0,
            view_in_ms: 0,
        }
    }
}

/// The login form state machine.
pub struct LoginController {
    /// Username field buffer (edited in place by the UI).
    pub username: String,
    /// Password field buffer.
    pub password: String,
    username_valid: bool,
    password_valid: bool,
    /// Error currently shown under the username field.
    pub username_error: Option<FieldError>,
    /// Error currently shown under the password field.
    pub password_error: Option<FieldError>,
    /// Bumped when a blur should re-emphasize a visible error; the UI
    /// consumes the counter to restart the shake animation.
    pub username_shake: u32,
    pub password_shake: u32,
    mode: AuthMode,
    submission: SubmissionState,
    view_on_success: View,
    view_on_cancel: View,
    on_cancel: Option<Box<dyn FnOnce()>>,
    /// Offline identity captured at submit time; the buffers may be
    /// cleared (by cancel) before the delay elapses.
    pending_offline: Option<Account>,
    /// An overlay is up and gates form re-enable until dismissed.
    overlay_pending: bool,
    timing: LoginTiming,
}

impl Default for LoginController {
    fn default() -> Self {
        Self::new(LoginTiming::default())
    }
}

impl LoginController {
    pub fn new(timing: LoginTiming) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            username_valid: false,
            password_valid: false,
            username_error: None,
            password_error: None,
            username_shake: 0,
            password_shake: 0,
            mode: AuthMode::Online,
            submission: SubmissionState::Idle,
            view_on_success: View::Landing,
            view_on_cancel: View::Settings,
            on_cancel: None,
            pending_offline: None,
            overlay_pending: false,
            timing,
        }
    }

    // --- Queries ---------------------------------------------------------

    /// Submit is allowed exactly when both fields are valid.
    pub fn submit_enabled(&self) -> bool {
        self.username_valid && self.password_valid
    }

    /// Whether the form controls are interactive right now.
    pub fn form_enabled(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::Idle | SubmissionState::Failed
        ) && !self.overlay_pending
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn offline_mode(&self) -> bool {
        self.mode == AuthMode::Offline
    }

    /// Label for the submit control in the current state.
    pub fn submit_label(&self) -> String {
        match self.submission {
            SubmissionState::Submitting { .. } => lang::text("login.loggingIn"),
            SubmissionState::Succeeded { .. } | SubmissionState::Navigating => {
                lang::text("login.success")
            }
            SubmissionState::Idle | SubmissionState::Failed => lang::text("login.login"),
        }
    }

    // --- Field events ----------------------------------------------------

    /// Replace the username buffer and re-validate (keystroke event).
    pub fn username_input(&mut self, value: &str) {
        self.username = value.to_string();
        self.username_changed();
    }

    /// Re-validate the username from the current buffer.
    pub fn username_changed(&mut self) {
        match validation::validate_username(&self.username) {
            FieldStatus::Valid => {
                self.username_valid = true;
                self.username_error = None;
            }
            FieldStatus::Invalid(err) => {
                self.username_valid = false;
                self.username_error = Some(err);
            }
        }
    }

    /// Replace the password buffer and re-validate (keystroke event).
    pub fn password_input(&mut self, value: &str) {
        self.password = value.to_string();
        self.password_changed();
    }

    /// Re-validate the password from the current buffer. Skipped entirely
    /// in offline mode, where the flag stays forced true.
    pub fn password_changed(&mut self) {
        if self.mode == AuthMode::Offline {
            self.password_valid = true;
            self.password_error = None;
            return;
        }
        match validation::validate_password(&self.password) {
            FieldStatus::Valid => {
                self.password_valid = true;
                self.password_error = None;
            }
            FieldStatus::Invalid(err) => {
                self.password_valid = false;
                self.password_error = Some(err);
            }
        }
    }

    /// Focus-loss on the username field: re-validate, and re-emphasize the
    /// error message if one is showing.
    pub fn username_blur(&mut self) {
        self.username_changed();
        if self.username_error.is_some() {
            self.username_shake = self.username_shake.wrapping_add(1);
        }
    }

    /// Focus-loss on the password field.
    pub fn password_blur(&mut self) {
        self.password_changed();
        if self.password_error.is_some() {
            self.password_shake = self.password_shake.wrapping_add(1);
        }
    }

    /// Toggle offline mode.
    ///
    /// On: the password is no longer required; its buffer and error are
    /// cleared, the flag is forced true and the username is re-validated so
    /// submit can become enabled from the username alone. Off: the password
    /// flag is recomputed from the (now relevant again) buffer.
    pub fn set_offline_mode(&mut self, offline: bool) {
        self.mode = if offline {
            AuthMode::Offline
        } else {
            AuthMode::Online
        };
        if offline {
            self.password.clear();
            self.password_error = None;
            self.password_valid = true;
            self.username_changed();
        } else {
            self.password_valid = false;
            self.password_changed();
        }
    }

    // --- Navigation targets and cancel -----------------------------------

    pub fn set_view_on_success(&mut self, view: View) {
        self.view_on_success = view;
    }

    pub fn view_on_success(&self) -> View {
        self.view_on_success
    }

    pub fn set_view_on_cancel(&mut self, view: View) {
        self.view_on_cancel = view;
    }

    /// Register the cancel handler; its presence is what makes the cancel
    /// control available.
    pub fn set_on_cancel(&mut self, handler: impl FnOnce() + 'static) {
        self.on_cancel = Some(Box::new(handler));
    }

    pub fn cancel_enabled(&self) -> bool {
        self.on_cancel.is_some()
    }

    /// Cancel the login view: navigate to the configured cancel
    /// destination, clear the fields and invoke the registered handler
    /// exactly once. Independent of the submission state; an in-flight
    /// submission is not aborted. A no-op once the handler is consumed.
    pub fn cancel(&mut self, ports: &mut LoginPorts<'_>, current: View) {
        let Some(handler) = self.on_cancel.take() else {
            return;
        };
        ports.navigator.switch_view(
            current,
            self.view_on_cancel,
            self.timing.view_out_ms,
            self.timing.view_in_ms,
        );
        self.clear_fields();
        handler();
    }

    /// Clear both field buffers and reset the validity flags.
    pub fn clear_fields(&mut self) {
        self.username.clear();
        self.password.clear();
        self.username_valid = false;
        self.password_valid = self.mode == AuthMode::Offline;
        self.username_error = None;
        self.password_error = None;
    }

    // --- Submission machine ----------------------------------------------

    /// Submit action. Rejected while the form is non-interactive or either
    /// flag is false; at most one submission is ever in flight.
    pub fn submit(&mut self, now: Instant) -> SubmitDispatch {
        if !self.form_enabled() || !self.submit_enabled() {
            return SubmitDispatch::Blocked;
        }
        self.submission = SubmissionState::Submitting {
            since: now,
            mode: self.mode,
        };
        match self.mode {
            AuthMode::Offline => {
                self.pending_offline = Some(offline::offline_account(&self.username));
                SubmitDispatch::Offline
            }
            AuthMode::Online => SubmitDispatch::Online {
                username: self.username.clone(),
                password: self.password.clone(),
            },
        }
    }

    /// Drive the timed transitions. Call once per frame.
    pub fn tick(&mut self, ports: &mut LoginPorts<'_>, now: Instant) {
        match self.submission {
            SubmissionState::Submitting {
                since,
                mode: AuthMode::Offline,
            } if now.duration_since(since) >= self.timing.submit_delay => {
                self.complete_offline(ports, now);
            }
            SubmissionState::Succeeded { since }
                if now.duration_since(since) >= self.timing.success_delay =>
            {
                ports.navigator.switch_view(
                    View::Login,
                    self.view_on_success,
                    self.timing.view_out_ms,
                    self.timing.view_in_ms,
                );
                self.submission = SubmissionState::Navigating;
            }
            _ => {}
        }
    }

    /// Complete the offline flow: hand the identity captured at submit
    /// time to the account store, notify the selection listener.
    fn complete_offline(&mut self, ports: &mut LoginPorts<'_>, now: Instant) {
        let Some(account) = self.pending_offline.take() else {
            tracing::warn!("Offline submission completed without a captured identity");
            self.submission = SubmissionState::Idle;
            return;
        };
        ports.accounts.upsert(account.clone());
        ports.accounts.set_selected(&account.id);
        match ports.accounts.persist() {
            Ok(()) => {
                ports.events.selected_changed(&account);
                tracing::info!("Offline login complete for {}", account.id);
                self.submission = SubmissionState::Succeeded { since: now };
            }
            Err(err) => {
                tracing::error!("Failed to persist offline account: {err}");
                self.username_error = Some(FieldError::Store(err.to_string()));
                self.submission = SubmissionState::Failed;
            }
        }
    }

    /// Outcome of the remote login started by an `Online` dispatch.
    pub fn remote_result(
        &mut self,
        ports: &mut LoginPorts<'_>,
        result: Result<Account, ApiError>,
        now: Instant,
    ) {
        if !matches!(
            self.submission,
            SubmissionState::Submitting {
                mode: AuthMode::Online,
                ..
            }
        ) {
            tracing::warn!("Remote login result arrived outside of a submission");
            return;
        }
        match result {
            Ok(account) => {
                ports.events.selected_changed(&account);
                tracing::info!("Login complete for {}", account.id);
                self.submission = SubmissionState::Succeeded { since: now };
            }
            Err(err) => {
                let (title, desc) = match err {
                    ApiError::Displayable(e) => (e.title, e.desc),
                    other => {
                        tracing::error!("Unhandled error during login: {other}");
                        (
                            lang::text("login.error.unknown.title"),
                            lang::text("login.error.unknown.desc"),
                        )
                    }
                };
                ports.overlay.show(title, desc, lang::text("login.tryAgain"));
                self.overlay_pending = true;
                self.submission = SubmissionState::Failed;
            }
        }
    }

    /// The overlay's action fired; the form becomes interactive again.
    pub fn overlay_dismissed(&mut self) {
        self.overlay_pending = false;
    }

    /// The success navigation finished: reset the form for the next visit.
    pub fn navigation_complete(&mut self) {
        self.clear_fields();
        self.view_on_success = View::Landing;
        self.on_cancel = None;
        self.overlay_pending = false;
        self.submission = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use ember_types::{AccountKind, DisplayableError};

    #[derive(Default)]
    struct MemStore {
        accounts: HashMap<String, Account>,
        selected: Option<String>,
        persist_calls: u32,
        fail_persist: bool,
    }

    impl AccountStore for MemStore {
        fn upsert(&mut self, account: Account) {
            self.accounts.insert(account.id.clone(), account);
        }

        fn set_selected(&mut self, id: &str) {
            self.selected = Some(id.to_string());
        }

        fn persist(&mut self) -> Result<(), StoreError> {
            self.persist_calls += 1;
            if self.fail_persist {
                Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct SelectionLog(Vec<Account>);

    impl AccountEvents for SelectionLog {
        fn selected_changed(&mut self, account: &Account) {
            self.0.push(account.clone());
        }
    }

    #[derive(Default)]
    struct NavLog(Vec<(View, View)>);

    impl ViewNavigator for NavLog {
        fn switch_view(&mut self, from: View, to: View, _out_ms: u32, _in_ms: u32) {
            self.0.push((from, to));
        }
    }

    #[derive(Default)]
    struct OverlayLog(Vec<(String, String, String)>);

    impl OverlayPort for OverlayLog {
        fn show(&mut self, title: String, desc: String, action_label: String) {
            self.0.push((title, desc, action_label));
        }
    }

    #[derive(Default)]
    struct Harness {
        store: MemStore,
        selection: SelectionLog,
        nav: NavLog,
        overlay: OverlayLog,
    }

    impl Harness {
        fn ports(&mut self) -> LoginPorts<'_> {
            LoginPorts {
                accounts: &mut self.store,
                events: &mut self.selection,
                navigator: &mut self.nav,
                overlay: &mut self.overlay,
            }
        }
    }

    fn controller() -> LoginController {
        LoginController::new(LoginTiming::immediate())
    }

    fn online_account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            username: "steve@example.com".to_string(),
            display_name: "Steve".to_string(),
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            kind: AccountKind::Online,
        }
    }

    #[test]
    fn submit_enabled_iff_both_fields_valid() {
        let mut login = controller();
        assert!(!login.submit_enabled());

        login.username_input("Steve");
        assert!(!login.submit_enabled());

        login.password_input("hunter2");
        assert!(login.submit_enabled());

        login.username_input("not valid!");
        assert!(!login.submit_enabled());

        login.username_input("steve@example.com");
        assert!(login.submit_enabled());

        login.password_input("");
        assert!(!login.submit_enabled());
    }

    #[test]
    fn empty_username_shows_required_error() {
        let mut login = controller();
        login.username_input("Steve");
        login.username_input("");
        assert_eq!(login.username_error, Some(FieldError::Required));
    }

    #[test]
    fn offline_mode_waives_the_password() {
        let mut login = controller();
        login.username_input("Steve");

        login.set_offline_mode(true);
        assert!(login.submit_enabled());
        assert!(login.password.is_empty());

        // Keystrokes while offline never invalidate the flag.
        login.password_input("");
        assert!(login.submit_enabled());

        login.set_offline_mode(false);
        assert!(!login.submit_enabled());
        assert_eq!(login.password_error, Some(FieldError::InvalidValue));
    }

    #[test]
    fn toggling_offline_clears_entered_password() {
        let mut login = controller();
        login.username_input("Steve");
        login.password_input("secret");

        login.set_offline_mode(true);
        assert!(login.password.is_empty());

        // Back online, the now-empty password blocks submission again.
        login.set_offline_mode(false);
        assert!(!login.submit_enabled());
    }

    #[test]
    fn blur_shakes_only_when_an_error_is_showing() {
        let mut login = controller();
        login.username_input("Steve");
        login.username_blur();
        assert_eq!(login.username_shake, 0);

        login.username_input("bad value!");
        login.username_blur();
        assert_eq!(login.username_shake, 1);
    }

    #[test]
    fn submit_blocked_until_valid() {
        let mut login = controller();
        assert_eq!(login.submit(Instant::now()), SubmitDispatch::Blocked);
        assert_eq!(login.submission(), SubmissionState::Idle);
    }

    #[test]
    fn second_submit_blocked_while_in_flight() {
        let mut login = controller();
        login.username_input("Steve");
        login.password_input("x");

        let now = Instant::now();
        assert!(matches!(login.submit(now), SubmitDispatch::Online { .. }));
        assert!(!login.form_enabled());
        assert_eq!(login.submit(now), SubmitDispatch::Blocked);
    }

    #[test]
    fn offline_submission_persists_derived_account() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.username_input("Steve");
        login.set_offline_mode(true);

        let now = Instant::now();
        assert_eq!(login.submit(now), SubmitDispatch::Offline);
        login.tick(&mut harness.ports(), now);

        let id = "00000000-0000-0000-0000-000004c7e3b3";
        assert!(harness.store.accounts.contains_key(id));
        assert_eq!(harness.store.selected.as_deref(), Some(id));
        assert_eq!(harness.store.persist_calls, 1);
        assert_eq!(harness.selection.0.len(), 1);
        assert_eq!(harness.selection.0[0].id, id);
        assert!(matches!(
            login.submission(),
            SubmissionState::Succeeded { .. }
        ));

        // Success pause elapses, navigation begins.
        login.tick(&mut harness.ports(), now);
        assert_eq!(harness.nav.0, vec![(View::Login, View::Landing)]);
        assert_eq!(login.submission(), SubmissionState::Navigating);

        login.navigation_complete();
        assert!(login.username.is_empty());
        assert!(login.form_enabled());
        assert_eq!(login.submission(), SubmissionState::Idle);
    }

    #[test]
    fn offline_persist_failure_surfaces_raw_store_error() {
        let mut harness = Harness::default();
        harness.store.fail_persist = true;
        let mut login = controller();
        login.username_input("Steve");
        login.set_offline_mode(true);

        let now = Instant::now();
        assert_eq!(login.submit(now), SubmitDispatch::Offline);
        login.tick(&mut harness.ports(), now);

        assert_eq!(login.submission(), SubmissionState::Failed);
        assert!(login.form_enabled());
        match &login.username_error {
            Some(FieldError::Store(msg)) => assert!(msg.contains("disk full")),
            other => panic!("expected store error, got {other:?}"),
        }
        // No selection notification on failure.
        assert!(harness.selection.0.is_empty());
    }

    #[test]
    fn online_success_notifies_selection_and_navigates() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.username_input("Steve");
        login.password_input("x");

        let now = Instant::now();
        let dispatch = login.submit(now);
        assert_eq!(
            dispatch,
            SubmitDispatch::Online {
                username: "Steve".to_string(),
                password: "x".to_string(),
            }
        );

        login.remote_result(&mut harness.ports(), Ok(online_account("abc")), now);
        assert_eq!(harness.selection.0.len(), 1);
        assert_eq!(harness.selection.0[0].id, "abc");
        // The account store is the remote flow's concern, not ours.
        assert_eq!(harness.store.persist_calls, 0);

        login.tick(&mut harness.ports(), now);
        assert_eq!(harness.nav.0, vec![(View::Login, View::Landing)]);

        login.navigation_complete();
        assert!(login.username.is_empty());
        assert!(login.password.is_empty());
        assert!(login.form_enabled());
    }

    #[test]
    fn displayable_rejection_shows_overlay_verbatim() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.username_input("Steve");
        login.password_input("x");

        let now = Instant::now();
        login.submit(now);
        login.remote_result(
            &mut harness.ports(),
            Err(ApiError::Displayable(DisplayableError {
                title: "Bad credentials".to_string(),
                desc: "Wrong password.".to_string(),
            })),
            now,
        );

        assert_eq!(harness.overlay.0.len(), 1);
        let (title, desc, action) = &harness.overlay.0[0];
        assert_eq!(title, "Bad credentials");
        assert_eq!(desc, "Wrong password.");
        assert_eq!(action, &lang::text("login.tryAgain"));

        // Form stays disabled until the overlay action fires.
        assert!(!login.form_enabled());
        login.overlay_dismissed();
        assert!(login.form_enabled());
        assert_eq!(login.submission(), SubmissionState::Failed);
    }

    #[test]
    fn opaque_rejection_uses_generic_message() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.username_input("Steve");
        login.password_input("x");

        let now = Instant::now();
        login.submit(now);
        login.remote_result(
            &mut harness.ports(),
            Err(ApiError::Network("connection reset".to_string())),
            now,
        );

        assert_eq!(harness.overlay.0.len(), 1);
        assert_eq!(harness.overlay.0[0].0, lang::text("login.error.unknown.title"));
        // The raw low-level cause never leaks into the overlay.
        assert!(!harness.overlay.0[0].1.contains("connection reset"));
    }

    #[test]
    fn cancel_runs_handler_exactly_once() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.set_view_on_cancel(View::Landing);

        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        login.set_on_cancel(move || seen.set(seen.get() + 1));
        assert!(login.cancel_enabled());

        login.username_input("Steve");
        login.password_input("x");
        // Cancel mid-submission: navigation still happens, handler fires.
        login.submit(Instant::now());
        login.cancel(&mut harness.ports(), View::Login);

        assert_eq!(harness.nav.0, vec![(View::Login, View::Landing)]);
        assert_eq!(calls.get(), 1);
        assert!(login.username.is_empty());
        assert!(!login.cancel_enabled());

        // Handler already consumed: a second cancel is a no-op.
        login.cancel(&mut harness.ports(), View::Login);
        assert_eq!(harness.nav.0.len(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn success_navigation_resets_destination_and_handler() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.set_view_on_success(View::Settings);
        login.set_on_cancel(|| {});
        login.username_input("Steve");
        login.password_input("x");

        let now = Instant::now();
        login.submit(now);
        login.remote_result(&mut harness.ports(), Ok(online_account("abc")), now);
        login.tick(&mut harness.ports(), now);
        assert_eq!(harness.nav.0, vec![(View::Login, View::Settings)]);

        login.navigation_complete();
        assert_eq!(login.view_on_success(), View::Landing);
        assert!(!login.cancel_enabled());
        assert_eq!(login.submit_label(), lang::text("login.login"));
    }

    #[test]
    fn late_remote_result_after_reset_is_ignored() {
        let mut harness = Harness::default();
        let mut login = controller();
        login.username_input("Steve");
        login.password_input("x");

        let now = Instant::now();
        login.submit(now);
        login.remote_result(&mut harness.ports(), Ok(online_account("abc")), now);
        login.tick(&mut harness.ports(), now);
        login.navigation_complete();

        // A duplicate completion must not restart the machine.
        login.remote_result(&mut harness.ports(), Ok(online_account("abc")), now);
        assert_eq!(login.submission(), SubmissionState::Idle);
        assert_eq!(harness.selection.0.len(), 1);
    }

    #[test]
    fn offline_flow_skips_remote_and_waits_out_the_delay() {
        let mut harness = Harness::default();
        let mut login = LoginController::new(LoginTiming {
            submit_delay: Duration::from_millis(500),
            ..LoginTiming::immediate()
        });
        login.username_input("Steve");
        login.set_offline_mode(true);

        let start = Instant::now();
        assert_eq!(login.submit(start), SubmitDispatch::Offline);

        // Before the simulated latency elapses, nothing happens.
        login.tick(&mut harness.ports(), start + Duration::from_millis(100));
        assert_eq!(harness.store.persist_calls, 0);
        assert!(matches!(
            login.submission(),
            SubmissionState::Submitting { .. }
        ));

        login.tick(&mut harness.ports(), start + Duration::from_millis(500));
        assert_eq!(harness.store.persist_calls, 1);
    }

    #[test]
    fn cancel_mid_offline_submission_keeps_the_captured_username() {
        let mut harness = Harness::default();
        let mut login = LoginController::new(LoginTiming {
            submit_delay: Duration::from_millis(500),
            ..LoginTiming::immediate()
        });
        login.set_on_cancel(|| {});
        login.username_input("Steve");
        login.set_offline_mode(true);

        let start = Instant::now();
        assert_eq!(login.submit(start), SubmitDispatch::Offline);

        // Cancel clears the buffers while the submission is still pending.
        login.cancel(&mut harness.ports(), View::Login);
        assert!(login.username.is_empty());

        login.tick(&mut harness.ports(), start + Duration::from_millis(500));

        // The identity persisted is the one entered at submit time, not
        // one derived from the now-empty buffer.
        let id = "00000000-0000-0000-0000-000004c7e3b3";
        assert!(harness.store.accounts.contains_key(id));
        assert_eq!(harness.store.selected.as_deref(), Some(id));
        assert!(!harness
            .store
            .accounts
            .contains_key("00000000-0000-0000-0000-000000000000"));
    }
}
