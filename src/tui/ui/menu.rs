use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("five-card-rank").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let title = [
        "┌───┐┌───┐┌───┐┌───┐┌───┐",
        "│ A ││10 ││ J ││ Q ││ K │",
        "└───┘└───┘└───┘└───┘└───┘",
    ];
    let mut lines: Vec<Line> = title
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Cyan))))
        .collect();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Configuration:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(item, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(para, inner(area));
}
