use docchat_core::UploadPhase;
use ratatui::style::{Color, Modifier, Style};

pub fn user_style() -> Style {
    Style::default().fg(Color::LightGreen)
}

pub fn assistant_style() -> Style {
    Style::default().fg(Color::LightBlue)
}

pub fn pending_style() -> Style {
    assistant_style().add_modifier(Modifier::DIM | Modifier::ITALIC)
}

pub fn heading_style() -> Style {
    assistant_style().add_modifier(Modifier::BOLD)
}

pub fn code_style() -> Style {
    Style::default().fg(Color::LightCyan)
}

pub fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn upload_status_style(phase: UploadPhase) -> Style {
    match phase {
        UploadPhase::Idle => Style::default().fg(Color::DarkGray),
        UploadPhase::Uploading => Style::default().fg(Color::Yellow),
        UploadPhase::Succeeded => Style::default().fg(Color::Green),
        UploadPhase::Failed => Style::default().fg(Color::Red),
    }
}
