//! Tools panel: roommate ledger and gig listings.
//!
//! Two independent lists projected straight from the snapshot. The only
//! client-side business rule in the whole system lives here: a ledger
//! row's display sign comes from its `type` tag, `owe_you` positive,
//! `you_owe` negative.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use finaura_api::{DashboardSnapshot, Roommate};

use crate::format::{rupees, truncate_string};

/// Sign-annotated amount for a ledger row: `+` when they owe you,
/// `-` when you owe them. Preserved exactly as the backend contract
/// expects it to be displayed.
pub fn display_amount(roommate: &Roommate) -> String {
    let sign = if roommate.is_owed_to_you() { "+" } else { "-" };
    format!("{}{}", sign, rupees(roommate.amount))
}

/// The roommate-ledger and gigs widget.
pub struct ToolsPanel<'a> {
    snapshot: &'a DashboardSnapshot,
    selected_index: usize,
    focused: bool,
}

impl<'a> ToolsPanel<'a> {
    /// Create a panel over a fetched snapshot.
    pub fn new(snapshot: &'a DashboardSnapshot) -> Self {
        Self {
            snapshot,
            selected_index: 0,
            focused: false,
        }
    }

    /// Set the selected roommate-row index.
    pub fn selected(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// Set focus state.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the content lines for the panel.
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "Roommate Ledger",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));

        if self.snapshot.roommates.is_empty() {
            lines.push(Line::from(Span::styled(
                "All settled up.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (idx, roommate) in self.snapshot.roommates.iter().enumerate() {
            lines.push(self.roommate_line(idx, roommate));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Gigs Near You",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));

        if self.snapshot.gigs.is_empty() {
            lines.push(Line::from(Span::styled(
                "No gigs right now.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for gig in &self.snapshot.gigs {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<24}", truncate_string(&gig.title, 24)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<16}", truncate_string(&gig.location, 16)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<14}", truncate_string(&gig.time, 14)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    rupees(gig.pay),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "[j/k] Select  [n] Nudge (rows where they owe you)",
            Style::default().fg(Color::DarkGray),
        )));

        lines
    }

    fn roommate_line(&self, idx: usize, roommate: &Roommate) -> Line<'static> {
        let is_selected = self.focused && idx == self.selected_index;
        let sel_indicator = if is_selected { "▶ " } else { "  " };

        let amount_color = if roommate.is_owed_to_you() {
            Color::Green
        } else {
            Color::Red
        };
        let name_style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(sel_indicator, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<12}", truncate_string(&roommate.name, 12)), name_style),
            Span::styled(
                format!("{:<20}", truncate_string(&roommate.reason, 20)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:>10}", display_amount(roommate)),
                Style::default().fg(amount_color).add_modifier(Modifier::BOLD),
            ),
        ];

        if roommate.is_owed_to_you() {
            spans.push(Span::styled("  [n] nudge", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }
}

impl Widget for ToolsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_type = if self.focused {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(self.build_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .title(Span::styled(
                    " Tools ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        );
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finaura_api::{Gig, RoommateKind, UserProfile};

    fn roommate(kind: RoommateKind, amount: f64) -> Roommate {
        Roommate {
            id: 1,
            name: "Rohan".into(),
            reason: "Pizza night".into(),
            kind,
            amount,
        }
    }

    fn snapshot_with(roommates: Vec<Roommate>, gigs: Vec<Gig>) -> DashboardSnapshot {
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
            roommates,
            gigs,
            peer_benchmark: None,
        }
    }

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

    #[test]
    fn test_display_amount_sign_follows_type() {
        // The one business rule: owe_you => "+", you_owe => "-",
        // across arbitrary positive amounts
        for amount in [1.0, 120.0, 450.0, 987.25, 99999.0] {
            let positive = display_amount(&roommate(RoommateKind::OweYou, amount));
            assert_eq!(positive, format!("+{}", rupees(amount)));

            let negative = display_amount(&roommate(RoommateKind::YouOwe, amount));
            assert_eq!(negative, format!("-{}", rupees(amount)));
        }
    }

    #[test]
    fn test_display_amount_exact_strings() {
        assert_eq!(display_amount(&roommate(RoommateKind::OweYou, 120.0)), "+₹120");
        assert_eq!(display_amount(&roommate(RoommateKind::YouOwe, 450.0)), "-₹450");
    }

    #[test]
    fn test_nudge_hint_only_on_owe_you_rows() {
        let snapshot = snapshot_with(
            vec![
                roommate(RoommateKind::OweYou, 120.0),
                roommate(RoommateKind::YouOwe, 450.0),
            ],
            vec![],
        );
        let lines = ToolsPanel::new(&snapshot).build_lines();

        let owe_you_row = lines_to_text(&lines[1..2]);
        let you_owe_row = lines_to_text(&lines[2..3]);
        assert!(owe_you_row.contains("[n] nudge"));
        assert!(!you_owe_row.contains("[n] nudge"));
    }

    #[test]
    fn test_gigs_rendered_verbatim() {
        let snapshot = snapshot_with(
            vec![],
            vec![Gig {
                id: 7,
                title: "Cafe shift".into(),
                location: "Koramangala".into(),
                time: "Sat 4-8pm".into(),
                pay: 800.0,
            }],
        );
        let text = lines_to_text(&ToolsPanel::new(&snapshot).build_lines());
        assert!(text.contains("Cafe shift"));
        assert!(text.contains("Koramangala"));
        assert!(text.contains("Sat 4-8pm"));
        assert!(text.contains("₹800"));
    }

    #[test]
    fn test_empty_lists_show_placeholders() {
        let snapshot = snapshot_with(vec![], vec![]);
        let text = lines_to_text(&ToolsPanel::new(&snapshot).build_lines());
        assert!(text.contains("All settled up."));
        assert!(text.contains("No gigs right now."));
    }
}
