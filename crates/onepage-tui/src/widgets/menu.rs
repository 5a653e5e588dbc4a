use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// The menu pane: one row per item, with the indicator glyph drawn at the
/// (possibly mid-animation) indicator row.
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let indicator_row = app.indicator.as_ref().map(|i| i.row());
        let glyph = app
            .indicator
            .as_ref()
            .map(|i| i.glyph().to_string())
            .unwrap_or_default();

        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
        for (idx, item) in app.menu.items().iter().enumerate() {
            if idx >= area.height as usize {
                break;
            }

            let marker = if indicator_row == Some(idx as u16) {
                Span::styled(glyph.clone(), Style::default().fg(theme.indicator))
            } else {
                Span::raw(" ")
            };

            let mut style = Style::default().fg(theme.fg1);
            if item.is_active() {
                style = style.fg(theme.active).add_modifier(Modifier::BOLD);
            }
            if item.is_hovered() {
                style = style.bg(theme.hover_bg);
            }

            lines.push(Line::from(vec![
                marker,
                Span::raw(" "),
                Span::styled(item.label.clone(), style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
