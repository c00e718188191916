//! Main application state and logic for the FinAura TUI.
//!
//! The `App` struct owns the active view, the last-fetched dashboard
//! snapshot, and the chat session, and coordinates between input events
//! and settled network results. The snapshot is shared read-only with
//! the presenters and replaced wholesale on re-fetch.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use finaura_api::{ApiClient, DashboardSnapshot};
use finaura_core::AppConfig;

use crate::chat_panel::ChatPanel;
use crate::dashboard_panel::DashboardPanel;
use crate::event::{AppEvent, InputHandler};
use crate::net::{NetBridge, NetMessage};
use crate::session::ChatSession;
use crate::tools_panel::ToolsPanel;
use crate::view::View;

/// Result type for app operations.
pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// How long to wait for input before pumping network results again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Lifecycle of the dashboard snapshot.
///
/// There is no partial state: a fetch either yields a whole new snapshot
/// or drops the view into the persistent offline state. Manual refresh
/// (`r`) is the only recovery path.
#[derive(Debug)]
pub enum DashboardState {
    /// Initial fetch still in flight.
    Loading,
    /// Last fetch succeeded.
    Ready(DashboardSnapshot),
    /// Last fetch failed; holds the user-facing reason.
    Offline(String),
}

/// Main application state.
pub struct App {
    /// Current active view
    current_view: View,
    /// Previous view (for back navigation)
    previous_view: Option<View>,
    /// Input handler for key events
    input_handler: InputHandler,
    /// Whether the app should quit
    should_quit: bool,
    /// Whether to show the help overlay
    show_help: bool,
    /// Status message to display in the footer
    status_message: Option<String>,
    /// Dashboard snapshot lifecycle
    dashboard: DashboardState,
    /// Whether a dashboard fetch is in flight
    fetch_pending: bool,
    /// Chat transcript and input state
    session: ChatSession,
    /// Selected roommate row in the tools view
    selected_roommate: usize,
    /// Spawns API requests onto the runtime
    net: NetBridge,
    /// Settled network results
    rx: UnboundedReceiver<NetMessage>,
    /// Dirty flag - whether UI needs redraw
    dirty: bool,
}

impl App {
    /// Create a new app instance against the configured backend.
    pub fn new(config: AppConfig, handle: tokio::runtime::Handle) -> AppResult<Self> {
        let client = ApiClient::new(&config)?;
        let (net, rx) = NetBridge::new(client, handle);

        Ok(Self {
            current_view: View::default(),
            previous_view: None,
            input_handler: InputHandler::new(),
            should_quit: false,
            show_help: false,
            status_message: None,
            dashboard: DashboardState::Loading,
            fetch_pending: false,
            session: ChatSession::new(),
            selected_roommate: 0,
            net,
            rx,
            dirty: true,
        })
    }

    /// Returns the current view.
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Returns whether the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the dashboard snapshot lifecycle state.
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Returns the chat session.
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Returns the footer status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Run the TUI until quit.
    pub fn run(&mut self) -> AppResult<()> {
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // One fetch at mount; `r` re-fetches
        self.request_dashboard();

        let result = self.event_loop(&mut terminal);

        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> AppResult<()> {
        while !self.should_quit {
            while let Ok(msg) = self.rx.try_recv() {
                self.handle_net_message(msg);
            }

            if self.take_dirty() {
                terminal.draw(|frame| self.draw(frame))?;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => self.mark_dirty(),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Issue a dashboard fetch unless one is already in flight.
    fn request_dashboard(&mut self) {
        if self.fetch_pending {
            return;
        }
        self.fetch_pending = true;
        self.net.fetch_dashboard();
        self.mark_dirty();
    }

    /// Switch to a specific view.
    pub fn switch_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
            self.mark_dirty();
        }
        // Chat mode follows the active view even on a redundant switch
        self.input_handler.set_chat_mode(view == View::Chat);
    }

    /// Go back to the previous view (if any).
    fn go_back(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.switch_view(prev);
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let event = self.input_handler.handle_key(key);
        self.handle_app_event(event);
    }

    /// Handle an application event.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SwitchView(view) => self.switch_view(view),
            AppEvent::NextView => self.switch_view(self.current_view.next()),
            AppEvent::PrevView => self.switch_view(self.current_view.prev()),
            AppEvent::ShowHelp => {
                self.show_help = true;
                self.mark_dirty();
            }
            AppEvent::Quit | AppEvent::ForceQuit => self.should_quit = true,
            AppEvent::Refresh => {
                self.status_message = Some("Refreshing…".to_string());
                self.request_dashboard();
            }
            AppEvent::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else if self.current_view == View::Chat {
                    self.go_back();
                }
                self.mark_dirty();
            }
            AppEvent::NavigateUp => {
                self.selected_roommate = self.selected_roommate.saturating_sub(1);
                self.mark_dirty();
            }
            AppEvent::NavigateDown => {
                let max = match &self.dashboard {
                    DashboardState::Ready(s) => s.roommates.len().saturating_sub(1),
                    _ => 0,
                };
                if self.selected_roommate < max {
                    self.selected_roommate += 1;
                }
                self.mark_dirty();
            }
            AppEvent::TextInput(c) => {
                self.session.push_char(c);
                self.mark_dirty();
            }
            AppEvent::Backspace => {
                self.session.backspace();
                self.mark_dirty();
            }
            AppEvent::Submit => self.submit_chat(),
            AppEvent::Nudge => self.nudge_selected(),
            AppEvent::CancellationScript => self.cancellation_script(),
            AppEvent::ScanReceipt => {
                // No backend contract for /scan exists; explicit no-op
                self.status_message =
                    Some("Receipt scanning isn't wired to the backend yet.".to_string());
                self.mark_dirty();
            }
            AppEvent::None => {}
        }
    }

    /// Attempt to send the chat input.
    fn submit_chat(&mut self) {
        if self.session.is_typing() {
            // Ignore-while-pending policy: no queueing, input stays put
            self.status_message = Some("Hold on - still thinking.".to_string());
            self.mark_dirty();
            return;
        }
        if let Some(text) = self.session.begin_send() {
            info!(chars = text.len(), "chat message sent");
            self.net.send_chat(text);
            self.mark_dirty();
        }
    }

    /// Nudge the selected roommate. Local notification only; no backend
    /// endpoint exists for reminders.
    fn nudge_selected(&mut self) {
        if self.current_view != View::Tools {
            return;
        }
        let DashboardState::Ready(snapshot) = &self.dashboard else {
            return;
        };
        let Some(roommate) = snapshot.roommates.get(self.selected_roommate) else {
            return;
        };
        if roommate.is_owed_to_you() {
            self.status_message = Some(format!("Nudge sent to {} 👉", roommate.name));
        } else {
            self.status_message = Some(format!("You owe {} - no nudging them.", roommate.name));
        }
        self.mark_dirty();
    }

    /// Generate a cancellation script for the flagged subscription.
    /// Fire-and-forget client-side notification; no network effect.
    fn cancellation_script(&mut self) {
        let DashboardState::Ready(snapshot) = &self.dashboard else {
            return;
        };
        let Some(sub) = &snapshot.unused_sub else {
            return;
        };
        self.status_message = Some(format!(
            "Script ready: \"Hi {} support, please cancel my subscription and waive this month's fee.\"",
            sub.name
        ));
        self.mark_dirty();
    }

    /// Handle a settled network result.
    pub fn handle_net_message(&mut self, msg: NetMessage) {
        match msg {
            NetMessage::Dashboard(Ok(snapshot)) => {
                info!("dashboard snapshot replaced");
                self.fetch_pending = false;
                self.selected_roommate = 0;
                self.dashboard = DashboardState::Ready(snapshot);
                self.status_message = None;
            }
            NetMessage::Dashboard(Err(err)) => {
                error!(error = %err, "dashboard fetch failed");
                self.fetch_pending = false;
                self.dashboard = DashboardState::Offline(err.friendly_message());
            }
            NetMessage::Chat(result) => {
                self.session.resolve(result.map(|reply| reply.response));
            }
        }
        self.mark_dirty();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if self.show_help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " FinAura ✨ ",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )];
        for view in View::ALL {
            let style = if view == self.current_view {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", view.hotkey_hint()), style));
        }
        spans.push(Span::styled(
            format!("  {}", chrono::Local::now().format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_body(&self, frame: &mut Frame, area: Rect) {
        match self.current_view {
            View::Chat => frame.render_widget(ChatPanel::new(&self.session), area),
            View::Dashboard | View::Tools => match &self.dashboard {
                DashboardState::Loading => {
                    self.draw_notice(frame, area, "Connecting to FinAura Brain…", Color::DarkGray);
                }
                DashboardState::Offline(reason) => {
                    let text = format!(
                        "⚠️ Backend Offline\n\n{}\n\nPress [r] to retry.",
                        reason
                    );
                    self.draw_notice(frame, area, &text, Color::Red);
                }
                DashboardState::Ready(snapshot) => {
                    if self.current_view == View::Dashboard {
                        frame.render_widget(DashboardPanel::new(snapshot), area);
                    } else {
                        frame.render_widget(
                            ToolsPanel::new(snapshot)
                                .selected(self.selected_roommate)
                                .focused(true),
                            area,
                        );
                    }
                }
            },
        }
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, text: &str, color: Color) {
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", self.current_view.title())),
            );
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status_message {
            Some(msg) => msg.clone(),
            None => "[d/c/t] Views  [Tab] Cycle  [r] Refresh  [?] Help  [q] Quit".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
            area,
        );
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = centered_rect(50, 60, frame.area());
        frame.render_widget(Clear, area);

        let lines = vec![
            Line::from(Span::styled(
                "Keys",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw("d       Spending dashboard"),
            Line::raw("c / :   Financial-therapist chat"),
            Line::raw("t       Roommates & gigs"),
            Line::raw("Tab     Cycle views"),
            Line::raw("r       Re-fetch the dashboard"),
            Line::raw("j/k     Select roommate row"),
            Line::raw("n       Nudge selected roommate"),
            Line::raw("s       Generate cancellation script"),
            Line::raw("Esc     Back / close"),
            Line::raw("q       Quit"),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        );
        frame.render_widget(paragraph, area);
    }
}

/// Compute a centered rect taking the given percentages of the area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use finaura_api::{ApiError, ChatReply, Roommate, RoommateKind, UnusedSub, UserProfile};

    fn test_app() -> App {
        App::new(AppConfig::default(), tokio::runtime::Handle::current()).unwrap()
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            user: UserProfile {
                name: "Aryan".into(),
                spending_dna: "Saver".into(),
                mood: "Calm".into(),
                current_balance: 5000.0,
                days_left: 10,
            },
            safe_to_spend: 150.0,
            unused_sub: Some(UnusedSub {
                name: "Netflix".into(),
                cost: 649.0,
            }),
            roommates: vec![
                Roommate {
                    id: 1,
                    name: "Rohan".into(),
                    reason: "Pizza night".into(),
                    kind: RoommateKind::OweYou,
                    amount: 120.0,
                },
                Roommate {
                    id: 2,
                    name: "Priya".into(),
                    reason: "Electricity".into(),
                    kind: RoommateKind::YouOwe,
                    amount: 450.0,
                },
            ],
            gigs: vec![],
            peer_benchmark: None,
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let app = test_app();
        assert!(matches!(app.dashboard(), DashboardState::Loading));
        assert_eq!(app.current_view(), View::Dashboard);
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_dashboard_result_replaces_snapshot_wholesale() {
        let mut app = test_app();
        app.handle_net_message(NetMessage::Dashboard(Ok(snapshot())));

        match app.dashboard() {
            DashboardState::Ready(s) => assert_eq!(s.user.name, "Aryan"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dashboard_error_enters_offline_state() {
        let mut app = test_app();
        // Even over a previously good snapshot: no stale render
        app.handle_net_message(NetMessage::Dashboard(Ok(snapshot())));
        app.handle_net_message(NetMessage::Dashboard(Err(ApiError::Protocol {
            status: 500,
            body: "boom".into(),
        })));

        assert!(matches!(app.dashboard(), DashboardState::Offline(_)));
    }

    #[tokio::test]
    async fn test_chat_cycle_appends_user_then_bot() {
        let mut app = test_app();
        let before = app.session().messages().len();

        for c in "I'm anxious about spending".chars() {
            app.handle_app_event(AppEvent::TextInput(c));
        }
        app.handle_app_event(AppEvent::Submit);
        assert!(app.session().is_typing());

        app.handle_net_message(NetMessage::Chat(Ok(ChatReply {
            response: "Let's talk about that.".into(),
        })));

        assert_eq!(app.session().messages().len(), before + 2);
        assert!(!app.session().is_typing());
        assert_eq!(
            app.session().messages().last().unwrap().text,
            "Let's talk about that."
        );
    }

    #[tokio::test]
    async fn test_empty_submit_leaves_transcript_unchanged() {
        let mut app = test_app();
        let before = app.session().messages().len();

        app.handle_app_event(AppEvent::Submit);
        app.handle_app_event(AppEvent::TextInput(' '));
        app.handle_app_event(AppEvent::Submit);

        assert_eq!(app.session().messages().len(), before);
        assert!(!app.session().is_typing());
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_ignored_with_notice() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::TextInput('a'));
        app.handle_app_event(AppEvent::Submit);
        let during = app.session().messages().len();

        app.handle_app_event(AppEvent::TextInput('b'));
        app.handle_app_event(AppEvent::Submit);

        assert_eq!(app.session().messages().len(), during);
        assert_eq!(app.status_message(), Some("Hold on - still thinking."));
    }

    #[tokio::test]
    async fn test_switch_view_toggles_chat_mode() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::SwitchView(View::Chat));
        assert_eq!(app.current_view(), View::Chat);

        app.handle_app_event(AppEvent::SwitchView(View::Tools));
        assert_eq!(app.current_view(), View::Tools);
        // 'd' should act as a hotkey again, not text input
        app.handle_key_event(KeyEvent::new(
            crossterm::event::KeyCode::Char('d'),
            crossterm::event::KeyModifiers::NONE,
        ));
        assert_eq!(app.current_view(), View::Dashboard);
    }

    #[tokio::test]
    async fn test_nudge_only_for_rows_owed_to_you() {
        let mut app = test_app();
        app.handle_net_message(NetMessage::Dashboard(Ok(snapshot())));
        app.handle_app_event(AppEvent::SwitchView(View::Tools));

        app.handle_app_event(AppEvent::Nudge);
        assert_eq!(app.status_message(), Some("Nudge sent to Rohan 👉"));

        app.handle_app_event(AppEvent::NavigateDown);
        app.handle_app_event(AppEvent::Nudge);
        assert_eq!(
            app.status_message(),
            Some("You owe Priya - no nudging them.")
        );
    }

    #[tokio::test]
    async fn test_cancellation_script_mentions_subscription() {
        let mut app = test_app();
        app.handle_net_message(NetMessage::Dashboard(Ok(snapshot())));

        app.handle_app_event(AppEvent::CancellationScript);
        let msg = app.status_message().unwrap();
        assert!(msg.contains("Netflix"));
    }

    #[tokio::test]
    async fn test_cancellation_script_noop_without_subscription() {
        let mut app = test_app();
        let mut snap = snapshot();
        snap.unused_sub = None;
        app.handle_net_message(NetMessage::Dashboard(Ok(snap)));

        app.handle_app_event(AppEvent::CancellationScript);
        assert!(app.status_message().is_none());
    }

    #[tokio::test]
    async fn test_navigate_down_clamps_to_roommate_count() {
        let mut app = test_app();
        app.handle_net_message(NetMessage::Dashboard(Ok(snapshot())));

        for _ in 0..10 {
            app.handle_app_event(AppEvent::NavigateDown);
        }
        app.handle_app_event(AppEvent::SwitchView(View::Tools));
        app.handle_app_event(AppEvent::Nudge);
        // Clamped to the last row (Priya)
        assert_eq!(
            app.status_message(),
            Some("You owe Priya - no nudging them.")
        );
    }

    #[tokio::test]
    async fn test_quit_events() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::Quit);
        assert!(app.should_quit());
    }
}
