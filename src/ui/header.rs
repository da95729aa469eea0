use crate::ui::posts::LoadStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget<'a>(&self, status: LoadStatus, base_url: &'a str) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = Style::default().fg(status_color(status));
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled("postboard", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(base_url, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status.as_str(), status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_color(status: LoadStatus) -> Color {
    match status {
        LoadStatus::Idle => HEADER_SEPARATOR,
        LoadStatus::Loading => STATUS_PENDING,
        LoadStatus::Succeeded => STATUS_OK,
        LoadStatus::Failed => STATUS_ERROR,
    }
}
