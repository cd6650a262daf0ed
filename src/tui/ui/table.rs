use crate::cards::{Card, Suit};
use crate::dealer::Deal;
use crate::evaluator::{labels, HandCategory};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // cards
            Constraint::Length(3), // category
            Constraint::Min(3),    // tally
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(format!(
        "Deals: {}   Seed: {}   Labels: {}",
        app.dealer.deals(),
        app.dealer.seed(),
        app.dealer.ruleset(),
    )))
    .block(Block::default().title("five-card-rank").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let last = app.dealer.last();
    let title = last.map_or_else(|| String::from("Hand"), |d| format!("Hand #{}", d.number));
    let hand_area = chunks[1];
    f.render_widget(Block::default().title(title).borders(Borders::ALL), hand_area);
    let slots = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(inner(hand_area));
    for (i, slot) in slots.iter().enumerate() {
        let card = last.map(|d| d.hand.cards()[i]);
        render_card_widget(f, *slot, card);
    }

    let result = match last {
        Some(deal) => Line::from(Span::styled(
            deal.category.label(),
            category_style(deal.category).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Press Space to deal.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let result_para = Paragraph::new(result)
        .alignment(Alignment::Center)
        .block(Block::default().title("Category").borders(Borders::ALL));
    f.render_widget(result_para, chunks[2]);

    draw_tally(f, app, chunks[3]);

    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = vec![Line::from("Space: deal a fresh shuffled deck")];
    if let Some(err) = app.deal_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![Line::from("? help • H history"), Line::from("M menu • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn draw_tally(f: &mut Frame, app: &AppState, area: Rect) {
    let tally = app.dealer.tally();
    let total = tally.total();
    let width = labels::max_label_width();
    let last = app.dealer.last().map(|d| d.category);
    let lines: Vec<Line> = tally
        .iter()
        .filter(|(category, _)| *category != HandCategory::None)
        .map(|(category, count)| {
            let pct = if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 };
            let text = format!("{:<width$}  {count:>6}  {pct:>6.2}%", category.label());
            let style = if last == Some(category) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    let para = Paragraph::new(lines).block(Block::default().title("Tally").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.dealer.history_recent(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No deals yet."));
    } else {
        lines.extend(entries.iter().map(history_line));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn history_line(deal: &Deal) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("#{:<5}", deal.number))];
    for card in deal.hand.cards() {
        let (glyph, style) = suit_glyph_and_style(card.suit());
        spans.push(Span::styled(format!("{:>3}{glyph}", card.rank().symbol()), style));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(deal.category.label(), category_style(deal.category)));
    Line::from(spans)
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / Enter: shuffle and deal five cards"),
        Line::from("- H: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply (starts a new session)"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Reference labels call an offsuit run \"Flush\""),
        Line::from("and a suited non-run \"Straight\"."),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn category_style(category: HandCategory) -> Style {
    match category.ordinal() {
        9.. => Style::default().fg(Color::Magenta),
        6..=8 => Style::default().fg(Color::Green),
        2..=5 => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    }
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    let style = match s {
        Suit::Heart | Suit::Diamond => Style::default().fg(Color::Red),
        Suit::Spade | Suit::Club => Style::default().fg(Color::White),
    };
    (s.glyph(), style)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>) {
    let block = Block::default().borders(Borders::ALL);
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let (glyph, style) = suit_glyph_and_style(c.suit());
        Line::from(Span::styled(format!("{}{glyph}", c.rank().symbol()), style))
    } else {
        Line::from("[  ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
