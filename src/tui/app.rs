// TUI application state
//
// App owns both pages and the overlays on top of them. Pages own their own
// state (see `page::HomePage`); App routes between them, runs the contact
// form's relay call off the UI thread and turns results into toasts.

use super::clipboard;
use super::components::toast::Toast;
use super::input::InputHandler;
use super::layout::NAV_HEIGHT;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::Scrollable;
use super::views::resume::ResumePage;
use crate::config::Config;
use crate::content::EMAIL;
use crate::logging::LogBuffer;
use crate::page::contact::SubmitRejected;
use crate::page::nav::NavOutcome;
use crate::page::router::{Route, Router};
use crate::page::section::SectionId;
use crate::page::{HomePage, PageSettings};
use crate::relay::{MessageRelay, RelayError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Offset (rows) past which the nav bar turns solid
const SCROLLED_THRESHOLD: usize = 2;

/// Rows trimmed from the viewport before a section counts as seen
const REVEAL_MARGIN: usize = 2;

/// Outcome of one relay call, sent back to the event loop
pub type RelayResult = Result<(), RelayError>;

/// Main application state for the TUI
pub struct App {
    pub router: Router,

    pub home: HomePage,

    pub resume: ResumePage,

    pub theme: Theme,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Active modal (captures all input)
    pub modal: Option<Modal>,

    /// Captured tracing output for the Logs modal
    pub log_buffer: LogBuffer,

    /// Key repeat and debounce
    pub input: InputHandler,

    /// Keyboard input goes to the contact form
    pub editing: bool,

    /// Nav items are folded into the menu toggle (updated on every draw)
    pub nav_collapsed: bool,

    /// Whether the relay has real credentials (footer shows "relay off")
    pub relay_configured: bool,

    /// Draw the particle background
    pub particles: bool,

    /// Animation frame counter (spinner, cursor blink, particles)
    pub animation_frame: u64,

    /// Whether the app should quit
    pub should_quit: bool,

    relay: Arc<dyn MessageRelay>,

    relay_tx: mpsc::Sender<RelayResult>,
}

/// Page tuning derived from config
pub fn page_settings(config: &Config) -> PageSettings {
    PageSettings {
        fixed_offset: config.scroll_offset.unwrap_or(NAV_HEIGHT as usize),
        scrolled_threshold: SCROLLED_THRESHOLD,
        reveal_margin: REVEAL_MARGIN,
    }
}

impl App {
    pub fn new(
        config: &Config,
        log_buffer: LogBuffer,
        relay: Arc<dyn MessageRelay>,
        relay_tx: mpsc::Sender<RelayResult>,
        start: Route,
    ) -> Self {
        Self {
            router: Router::new(start),
            home: HomePage::new(page_settings(config)),
            resume: ResumePage::new(),
            theme: ThemeKind::from_name(&config.theme).theme(),
            toast: None,
            modal: None,
            log_buffer,
            input: InputHandler::new(),
            editing: false,
            nav_collapsed: false,
            relay_configured: relay.is_configured(),
            particles: config.particles,
            animation_frame: 0,
            should_quit: false,
            relay,
            relay_tx,
        }
    }

    /// Per-tick work: animations, coalesced scroll resolution, toast expiry
    pub fn tick(&mut self, now: Instant) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        match self.router.current() {
            Route::Home => {
                self.home.tick();
                self.home.frame(now);
            }
            Route::Resume => {
                self.resume.viewport.tick();
            }
        }

        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Whichever page is on screen
    pub fn current_page_mut(&mut self) -> &mut dyn Scrollable {
        match self.router.current() {
            Route::Home => &mut self.home,
            Route::Resume => &mut self.resume.viewport,
        }
    }

    pub fn navigate(&mut self, path: &str) {
        if self.router.navigate(path) {
            self.leave_page();
            if self.router.current() == Route::Resume {
                self.resume.viewport.scroll_to_top();
            }
        }
    }

    pub fn back(&mut self) {
        if self.router.back() {
            self.leave_page();
        }
    }

    fn leave_page(&mut self) {
        self.editing = false;
        self.home.nav_mut().close_mobile_menu();
        self.input.reset();
    }

    /// Act on the result of a nav activation
    pub fn apply_nav(&mut self, outcome: Option<NavOutcome>) {
        match outcome {
            Some(NavOutcome::Route(path)) => self.navigate(path),
            Some(NavOutcome::MissingAnchor(id)) => {
                tracing::debug!(section = %id, "Nav target not laid out");
            }
            Some(NavOutcome::Scrolled(_)) | None => {}
        }
    }

    /// Scroll to the contact section and start typing
    pub fn start_editing(&mut self) {
        self.home.scroll_to(SectionId::Contact);
        self.home.nav_mut().close_mobile_menu();
        self.editing = true;
    }

    pub fn next_theme(&mut self) {
        let kind = self.theme.kind.next();
        self.theme = kind.theme();
        self.toast = Some(Toast::new(format!("Theme: {}", kind.name())));
    }

    pub fn copy_email(&mut self) {
        self.toast = Some(Toast::new(clipboard::copy_with_feedback(EMAIL, "email")));
    }

    /// Validate the form and hand the message to the relay
    ///
    /// The relay runs in its own task; its result comes back through the
    /// event loop as `on_relay_result`.
    pub fn submit(&mut self) {
        let message = match self.home.form_mut().begin_submit() {
            Ok(message) => message,
            Err(SubmitRejected::AlreadySubmitting) => {
                tracing::debug!("Submit ignored, already sending");
                return;
            }
            Err(SubmitRejected::Invalid(error)) => {
                tracing::debug!(field = error.field().label(), %error, "Contact form invalid");
                self.editing = true;
                return;
            }
        };

        tracing::info!("Sending contact message");
        let relay = Arc::clone(&self.relay);
        let tx = self.relay_tx.clone();
        tokio::spawn(async move {
            let result = relay.send(&message).await;
            // Receiver is gone once the app has quit
            let _ = tx.send(result).await;
        });
    }

    pub fn on_relay_result(&mut self, result: RelayResult) {
        match &result {
            Ok(()) => tracing::info!("Contact message sent"),
            Err(e) => tracing::warn!(error = %e, "Contact message failed"),
        }

        if let Some(outcome) = self.home.form_mut().finish_submit(&result) {
            self.toast = Some(Toast::from_notification(&outcome.notification()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::contact::FormPhase;
    use crate::relay::RelayMessage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Relay that records messages and replies with a fixed result
    struct FakeRelay {
        reply: RelayResult,
        sent: Mutex<Vec<RelayMessage>>,
    }

    #[async_trait]
    impl MessageRelay for FakeRelay {
        async fn send(&self, message: &RelayMessage) -> Result<(), RelayError> {
            if let Ok(mut sent) = self.sent.lock() {
                sent.push(message.clone());
            }
            self.reply.clone()
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    fn app_with(reply: RelayResult) -> (App, Arc<FakeRelay>, mpsc::Receiver<RelayResult>) {
        let relay = Arc::new(FakeRelay {
            reply,
            sent: Mutex::new(Vec::new()),
        });
        let (tx, rx) = mpsc::channel(4);
        let app = App::new(
            &Config::default(),
            LogBuffer::new(),
            relay.clone(),
            tx,
            Route::Home,
        );
        (app, relay, rx)
    }

    fn fill(app: &mut App) {
        let form = app.home.form_mut();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Hello there".to_string();
    }

    #[tokio::test]
    async fn test_submit_success_clears_form_and_toasts() {
        let (mut app, relay, mut rx) = app_with(Ok(()));
        fill(&mut app);

        app.submit();
        assert_eq!(app.home.form().phase(), FormPhase::Submitting);

        let result = rx.recv().await.expect("relay replies");
        app.on_relay_result(result);

        assert_eq!(app.home.form().phase(), FormPhase::Idle);
        assert!(app.home.form().name.is_empty());
        assert_eq!(
            app.toast.as_ref().map(|t| t.title.as_str()),
            Some("Message sent successfully!")
        );
        let sent = relay.sent.lock().expect("lock");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields() {
        let (mut app, _relay, mut rx) = app_with(Err(RelayError::NotConfigured));
        fill(&mut app);

        app.submit();
        let result = rx.recv().await.expect("relay replies");
        app.on_relay_result(result);

        assert_eq!(app.home.form().phase(), FormPhase::Idle);
        assert_eq!(app.home.form().name, "Ada");
        assert_eq!(
            app.toast.as_ref().map(|t| t.title.as_str()),
            Some("Failed to send message")
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_sending_is_ignored() {
        let (mut app, relay, mut rx) = app_with(Ok(()));
        fill(&mut app);

        app.submit();
        app.submit();

        let result = rx.recv().await.expect("relay replies");
        app.on_relay_result(result);
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
        assert_eq!(relay.sent.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_relay() {
        let (mut app, relay, mut rx) = app_with(Ok(()));
        app.submit();

        assert!(app.editing);
        assert!(app.home.form().hint().is_some());
        assert_eq!(app.home.form().phase(), FormPhase::Idle);
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert!(relay.sent.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_resume_route_and_back() {
        let (mut app, _relay, _rx) = app_with(Ok(()));
        app.home.nav_mut().toggle_mobile_menu();

        app.apply_nav(Some(NavOutcome::Route("/resume")));
        assert_eq!(app.router.current(), Route::Resume);
        assert!(!app.home.nav().is_mobile_menu_open());

        app.back();
        assert_eq!(app.router.current(), Route::Home);
    }

    #[test]
    fn test_fixed_offset_defaults_to_nav_height() {
        let mut config = Config::default();
        assert_eq!(page_settings(&config).fixed_offset, NAV_HEIGHT as usize);
        config.scroll_offset = Some(100);
        assert_eq!(page_settings(&config).fixed_offset, 100);
    }
}
