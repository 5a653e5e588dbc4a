use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let fragment = app
            .location
            .current()
            .map(|f| format!("#{f}"))
            .or_else(|| {
                app.menu
                    .active_index()
                    .and_then(|i| app.menu.items().get(i))
                    .map(|i| format!("#{}", i.section_id))
            })
            .unwrap_or_else(|| "-".to_string());

        let status_text = format!(
            " {} | {}/{} sections | row {}",
            fragment,
            app.menu.active_index().map(|i| i + 1).unwrap_or(0),
            app.menu.items().len(),
            app.scroll.current(),
        );

        let help_hint = " q:quit j/k:scroll n/p:section gg/G:top/bottom ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
