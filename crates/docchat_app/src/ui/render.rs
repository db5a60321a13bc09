use docchat_core::{AppViewModel, MessageRowView, Sender};
use docchat_engine::{render_markup, LineKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::app::{Focus, Shell};

pub fn draw(frame: &mut Frame<'_>, view: &AppViewModel, shell: &Shell) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // upload path input
            Constraint::Length(1), // upload status line
            Constraint::Min(1),    // chat history
            Constraint::Length(3), // chat input
        ])
        .split(frame.area());

    draw_upload_input(frame, chunks[0], shell);
    draw_upload_status(frame, chunks[1], view);
    draw_history(frame, chunks[2], view);
    draw_chat_input(frame, chunks[3], view, shell);
}

fn draw_upload_input(frame: &mut Frame<'_>, area: Rect, shell: &Shell) {
    let focused = shell.focus == Focus::Upload;
    let input = Paragraph::new(shell.upload_path.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Upload PDF (drop or type a path, Enter to send)")
            .border_style(theme::focus_style(focused)),
    );
    frame.render_widget(input, area);
    if focused {
        frame.set_cursor_position((
            area.x + shell.upload_path.len() as u16 + 1,
            area.y + 1,
        ));
    }
}

fn draw_upload_status(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let status = Paragraph::new(view.upload.text.as_str())
        .style(theme::upload_status_style(view.upload.phase));
    frame.render_widget(status, area);
}

fn draw_history(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let mut lines: Vec<Line<'_>> = Vec::new();
    for message in &view.messages {
        lines.extend(message_lines(message));
    }

    // Keep the newest messages visible; long lines are clipped at the edge.
    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = lines.len().saturating_sub(inner_height) as u16;

    let history = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Chat"))
        .scroll((offset, 0));
    frame.render_widget(history, area);
}

fn message_lines(message: &MessageRowView) -> Vec<Line<'static>> {
    match message.sender {
        Sender::User => vec![Line::from(vec![
            Span::styled("You: ", theme::user_style()),
            Span::styled(message.text.clone(), theme::user_style()),
        ])],
        Sender::Assistant if message.pending => vec![Line::from(Span::styled(
            format!("AI: {}", message.text),
            theme::pending_style(),
        ))],
        Sender::Assistant => {
            let mut lines = Vec::new();
            for (index, markup) in render_markup(&message.text).into_iter().enumerate() {
                let prefix = if index == 0 { "AI: " } else { "    " };
                let (bullet, style) = match markup.kind {
                    LineKind::Paragraph => ("", theme::assistant_style()),
                    LineKind::Heading => ("", theme::heading_style()),
                    LineKind::Bullet => ("• ", theme::assistant_style()),
                    LineKind::Code => ("▎ ", theme::code_style()),
                };
                lines.push(Line::from(vec![
                    Span::styled(prefix, theme::assistant_style()),
                    Span::styled(format!("{bullet}{}", markup.text), style),
                ]));
            }
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "AI: ".to_string(),
                    theme::assistant_style(),
                )));
            }
            lines
        }
    }
}

fn draw_chat_input(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel, shell: &Shell) {
    let focused = shell.focus == Focus::Chat;
    let input = Paragraph::new(view.chat_draft.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Ask about your documents (Enter to send, Tab to switch)")
            .border_style(theme::focus_style(focused)),
    );
    frame.render_widget(input, area);
    if focused {
        frame.set_cursor_position((area.x + view.chat_draft.len() as u16 + 1, area.y + 1));
    }
}
