//! Chat panel: transcript, typing indicator, and input line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::session::{ChatSession, Sender};

/// The financial-therapist chat widget.
pub struct ChatPanel<'a> {
    session: &'a ChatSession,
}

impl<'a> ChatPanel<'a> {
    /// Create a panel over the chat session.
    pub fn new(session: &'a ChatSession) -> Self {
        Self { session }
    }

    /// Build the transcript lines, newest last.
    pub fn build_transcript_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for message in self.session.messages() {
            let (prefix, style) = match message.sender {
                Sender::User => ("you  ", Style::default().fg(Color::Cyan)),
                Sender::Bot => ("aura ", Style::default().fg(Color::Green)),
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
                Span::styled(message.text.clone(), Style::default().fg(Color::White)),
            ]));
        }

        if self.session.is_typing() {
            lines.push(Line::from(Span::styled(
                "aura is typing…",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        lines
    }

    /// Build the input line with a cursor marker.
    pub fn build_input_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(self.session.input().to_string()),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ])
    }
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let transcript_lines = self.build_transcript_lines();

        // Keep the tail of the transcript in view
        let visible = chunks[0].height.saturating_sub(2) as usize;
        let scroll = transcript_lines.len().saturating_sub(visible) as u16;

        let transcript = Paragraph::new(transcript_lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Financial Therapist ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            );
        transcript.render(chunks[0], buf);

        let input = Paragraph::new(self.build_input_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " [Enter] Send  [Ctrl+S] Scan receipt  [Esc] Back ",
                    Style::default().fg(Color::DarkGray),
                )),
        );
        input.render(chunks[1], buf);
    }
}
