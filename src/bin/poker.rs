use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use five_card_rank::cards::{parse_cards, CardParseError};
use five_card_rank::dealer::{DealConfig, Dealer};
use five_card_rank::evaluator::{evaluate_with, Ruleset};
use five_card_rank::hand::HandError;
use five_card_rank::tui::{app::AppState, controller};
use log::info;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Seed for a reproducible dealing session.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Use standard poker names for run-only and suit-only hands.
    #[clap(long)]
    conventional: bool,
    /// Print dealt hands instead of starting the TUI.
    #[clap(long)]
    plain: bool,
    /// Number of hands to deal in plain mode.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    deals: u64,
    /// Classify the given cards and exit, e.g. "As 10s Js Qs Ks".
    #[clap(long)]
    hand: Option<String>,
}

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();
}

fn classify(cards: &str, ruleset: Ruleset) -> Result<(), AppError> {
    let cards = parse_cards(cards)?;
    let category = evaluate_with(&cards, ruleset);
    println!("{category}");
    Ok(())
}

fn deal_plain(config: DealConfig, deals: u64) -> Result<(), AppError> {
    let mut dealer = Dealer::new(config);
    info!("dealing {deals} hands");
    for _ in 0..deals {
        let deal = dealer.deal()?;
        println!("{}\t{}", deal.hand, deal.category);
    }
    if deals > 1 {
        println!();
        for (category, count) in dealer.tally().iter().filter(|(_, n)| *n > 0) {
            println!("{category}\t{count}");
        }
    }
    Ok(())
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let ruleset = if cli.conventional { Ruleset::Conventional } else { Ruleset::Reference };
    let config = DealConfig { seed: cli.seed, ruleset };

    if let Some(cards) = cli.hand.as_deref() {
        init_logger();
        return classify(cards, ruleset);
    }

    if cli.plain || !io::stdout().is_terminal() {
        init_logger();
        return deal_plain(config, cli.deals);
    }

    let mut terminal = setup_terminal()?;
    let mut app = AppState::with_config(config);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res.map_err(AppError::from)
}
