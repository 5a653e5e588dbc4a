use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// The document pane: visible rows from the current scroll offset,
/// headings and inline links styled. Lines render one per row so link
/// hit-testing stays a plain coordinate lookup.
pub struct DocumentWidget;

impl DocumentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let top = app.scroll.current() as usize;
        let doc = &app.document;

        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
        for (offset, text) in doc
            .lines()
            .iter()
            .skip(top)
            .take(area.height as usize)
            .enumerate()
        {
            let row = (top + offset) as u16;
            if doc.is_heading(row) {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.heading)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(body_line(app, top + offset, text));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Split a body line into plain and link spans.
fn body_line<'a>(app: &App, row: usize, text: &'a str) -> Line<'a> {
    let theme = &app.theme;
    let mut links: Vec<_> = app
        .document
        .links()
        .iter()
        .filter(|l| l.line == row)
        .collect();
    if links.is_empty() {
        return Line::from(Span::styled(text, Style::default().fg(theme.fg0)));
    }
    links.sort_by_key(|l| l.start);

    let chars: Vec<char> = text.chars().collect();
    let link_style = Style::default()
        .fg(theme.link)
        .add_modifier(Modifier::UNDERLINED);
    let mut spans = Vec::new();
    let mut cursor = 0;
    for link in links {
        if link.start > cursor {
            let plain: String = chars[cursor..link.start].iter().collect();
            spans.push(Span::styled(plain, Style::default().fg(theme.fg0)));
        }
        let token: String = chars[link.start..link.end].iter().collect();
        spans.push(Span::styled(token, link_style));
        cursor = link.end;
    }
    if cursor < chars.len() {
        let rest: String = chars[cursor..].iter().collect();
        spans.push(Span::styled(rest, Style::default().fg(theme.fg0)));
    }
    Line::from(spans)
}
