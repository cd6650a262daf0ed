mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }
}

/// Area inside a one-cell border.
fn inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center).areas(area);
    let [cell] =
        Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center).areas(row);
    cell
}
