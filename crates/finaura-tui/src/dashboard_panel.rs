//! Dashboard panel: the four display blocks of the spending view.
//!
//! A pure projection of the snapshot. The hero block and peer benchmark
//! are always rendered; the mood alert appears only for the exact mood
//! `"Stressed"`, and the vampire-subscription alert only when the backend
//! flagged an unused subscription. Nothing here computes money figures -
//! every number is displayed verbatim from the payload.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use finaura_api::{DashboardSnapshot, PeerStat};

use crate::format::rupees;

/// Illustrative peer-benchmark ratios, shown until the backend supplies
/// real percentiles in the payload.
const STATIC_BENCHMARK: [(&str, f64, f64); 3] = [
    ("Food", 40.0, 35.0),
    ("Subscriptions", 25.0, 15.0),
    ("Travel", 10.0, 20.0),
];

/// Width of a full benchmark bar in characters.
const BAR_WIDTH: f64 = 20.0;

/// The spending dashboard widget.
pub struct DashboardPanel<'a> {
    snapshot: &'a DashboardSnapshot,
}

impl<'a> DashboardPanel<'a> {
    /// Create a panel over a fetched snapshot.
    pub fn new(snapshot: &'a DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    /// Build the content lines for the panel.
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        self.push_header(&mut lines);
        lines.push(Line::raw(""));
        self.push_hero(&mut lines);
        lines.push(Line::raw(""));
        self.push_mood_alert(&mut lines);
        self.push_benchmark(&mut lines);
        self.push_subscription_alert(&mut lines);

        lines
    }

    fn push_header(&self, lines: &mut Vec<Line<'static>>) {
        let user = &self.snapshot.user;
        lines.push(Line::from(vec![
            Span::styled(
                format!("Welcome back, {} ", user.name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", user.spending_dna),
                Style::default().fg(Color::Magenta),
            ),
        ]));
    }

    fn push_hero(&self, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(Span::styled(
            "Safe-to-Spend Daily Limit",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            rupees(self.snapshot.safe_to_spend),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(format!(
            "You have {} days left. Spend less than this to survive.",
            self.snapshot.user.days_left
        ))));
        lines.push(Line::from(vec![
            Span::styled("Total Balance: ", Style::default().fg(Color::DarkGray)),
            Span::raw(rupees(self.snapshot.user.current_balance)),
        ]));
    }

    fn push_mood_alert(&self, lines: &mut Vec<Line<'static>>) {
        if !self.snapshot.user.is_stressed() {
            return;
        }
        lines.push(Line::from(vec![
            Span::styled("⚠ Mood check: ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("you're feeling stressed. Big purchases can wait 24 hours."),
        ]));
        lines.push(Line::raw(""));
    }

    fn push_benchmark(&self, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(Span::styled(
            "You vs. peers",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));

        match &self.snapshot.peer_benchmark {
            // Backend-supplied percentiles are rendered verbatim
            Some(stats) => {
                for stat in stats {
                    Self::push_benchmark_row(lines, stat);
                }
            }
            None => {
                for (label, you, peers) in STATIC_BENCHMARK {
                    Self::push_benchmark_row(
                        lines,
                        &PeerStat {
                            label: label.to_string(),
                            you,
                            peers,
                        },
                    );
                }
            }
        }
        lines.push(Line::raw(""));
    }

    fn push_benchmark_row(lines: &mut Vec<Line<'static>>, stat: &PeerStat) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", stat.label), Style::default().fg(Color::White)),
            Span::styled("you   ", Style::default().fg(Color::DarkGray)),
            Span::styled(bar(stat.you), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {}%", stat.you)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(14)),
            Span::styled("peers ", Style::default().fg(Color::DarkGray)),
            Span::styled(bar(stat.peers), Style::default().fg(Color::DarkGray)),
            Span::raw(format!(" {}%", stat.peers)),
        ]));
    }

    fn push_subscription_alert(&self, lines: &mut Vec<Line<'static>>) {
        let Some(sub) = &self.snapshot.unused_sub else {
            return;
        };
        lines.push(Line::from(vec![
            Span::styled(
                "🧛 Vampire Alert: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "you are paying {} for {} but not using it!",
                rupees(sub.cost),
                sub.name
            )),
        ]));
        lines.push(Line::from(Span::styled(
            "[s] Generate cancellation script",
            Style::default().fg(Color::DarkGray),
        )));
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.build_lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Spending Dashboard ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            );
        paragraph.render(area, buf);
    }
}

/// Render a proportional bar for a percentage value.
fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH).round().clamp(0.0, BAR_WIDTH) as usize;
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finaura_api::{UnusedSub, UserProfile};

    fn lines_to_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn calm_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            user: UserProfile {
                name: "Aryan".into(),
                spending_dna: "Saver".into(),
                mood: "Calm".into(),
                current_balance: 5000.0,
                days_left: 10,
            },
            safe_to_spend: 150.0,
            unused_sub: None,
            roommates: vec![],
            gigs: vec![],
            peer_benchmark: None,
        }
    }

    #[test]
    fn test_hero_block_shows_safe_to_spend_verbatim() {
        let snapshot = calm_snapshot();
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());

        assert!(text.contains("₹150"));
        assert!(text.contains("10 days left"));
        // Displayed, not derived: 5000/10 would be ₹500
        assert!(!text.contains("₹500\n"));
    }

    #[test]
    fn test_no_mood_alert_when_calm() {
        let snapshot = calm_snapshot();
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(!text.contains("Mood check"));
    }

    #[test]
    fn test_mood_alert_requires_exact_stressed() {
        let mut snapshot = calm_snapshot();
        snapshot.user.mood = "stressed".into(); // wrong case
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(!text.contains("Mood check"));

        snapshot.user.mood = "Stressed".into();
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(text.contains("Mood check"));
    }

    #[test]
    fn test_no_subscription_alert_when_absent() {
        let snapshot = calm_snapshot();
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(!text.contains("Vampire Alert"));
    }

    #[test]
    fn test_subscription_alert_shows_exact_name_and_cost() {
        let mut snapshot = calm_snapshot();
        snapshot.unused_sub = Some(UnusedSub {
            name: "Netflix".into(),
            cost: 649.0,
        });
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(text.contains("Vampire Alert"));
        assert!(text.contains("Netflix"));
        assert!(text.contains("₹649"));
    }

    #[test]
    fn test_static_benchmark_shown_without_payload_percentiles() {
        let snapshot = calm_snapshot();
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(text.contains("You vs. peers"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_payload_percentiles_rendered_verbatim() {
        let mut snapshot = calm_snapshot();
        snapshot.peer_benchmark = Some(vec![PeerStat {
            label: "Rent".into(),
            you: 61.5,
            peers: 48.0,
        }]);
        let text = lines_to_text(&DashboardPanel::new(&snapshot).build_lines());
        assert!(text.contains("Rent"));
        assert!(text.contains("61.5%"));
        assert!(text.contains("48%"));
        // Static rows are replaced, not mixed in
        assert!(!text.contains("Subscriptions"));
    }

    #[test]
    fn test_bar_is_proportional() {
        assert_eq!(bar(100.0).chars().count(), 20);
        assert_eq!(bar(50.0).chars().count(), 10);
        assert_eq!(bar(0.0).chars().count(), 0);
    }
}
