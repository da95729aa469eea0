use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};
use crate::ui::view::{PostListView, PostRow};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.posts().status, app.base_url()),
        header,
    );

    frame.render_widget(Clear, body);
    let view = PostListView::from_state(app.posts(), app.selection());
    draw_body(frame, body, &view, app.spinner());

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, view: &PostListView, spinner: char) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(
            " Posts ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));

    match view {
        PostListView::Loading => {
            let line = Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(ACCENT)),
                Span::styled("Loading...", Style::default().fg(HEADER_TEXT)),
            ]);
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        PostListView::Error(message) => {
            let line = Line::styled(
                format!("Error: {message}"),
                Style::default().fg(STATUS_ERROR),
            );
            let paragraph = Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
        }
        PostListView::Posts { rows, .. } if rows.is_empty() => {
            let line = Line::styled("No posts.", Style::default().fg(BODY_TEXT));
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        PostListView::Posts { rows, selected } => {
            let items: Vec<ListItem> = rows.iter().map(post_item).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(*selected);
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn post_item(row: &PostRow) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("#{} ", row.id), Style::default().fg(ACCENT)),
        Span::styled(
            row.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ])];
    // API bodies embed newlines
    lines.extend(
        row.body
            .lines()
            .map(|text| Line::styled(format!("  {text}"), Style::default().fg(BODY_TEXT))),
    );
    lines.push(Line::from(""));
    ListItem::new(lines)
}
