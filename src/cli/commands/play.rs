use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::example::EXAMPLE_SENTINEL;
use crate::core::game::{BoardSource, Card, GameSession, TerminalBell, load_board};
use crate::errors::{AppError, AppResult};
use crate::models::Board;
use crate::store::{BoardStore, FileStore};
use crate::ui::messages::{header, info, status, success, victory, warning};
use crate::utils::colors::colorize_card;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

fn prompt(text: &str) {
    print!("{}", text);
    io::stdout().flush().ok();
}

/// Numbered picker: stored boards first, the bundled example last.
fn pick_source<I>(store: &BoardStore<FileStore>, lines: &mut I) -> AppResult<BoardSource>
where
    I: Iterator<Item = io::Result<String>>,
{
    let boards = store.list();
    let mut values: Vec<String> = Vec::new();

    header("Select a board");
    for board in &boards {
        values.push(board.id.clone());
        println!("{:>3}. {}", values.len(), board.label());
    }
    values.push(EXAMPLE_SENTINEL.to_string());
    println!("{:>3}. Example board (bundled)", values.len());

    prompt("\nBoard number: ");
    let answer = lines.next().transpose()?.unwrap_or_default();

    let chosen = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| values.get(i))
        .and_then(|v| BoardSource::from_selection(v));

    chosen.ok_or_else(|| AppError::InvalidArgument("Choose a board first.".to_string()))
}

fn card_line(index: usize, card: &Card) -> String {
    let c = &card.character;
    let mark = if card.eliminated { "❌" } else { "  " };
    let label = format!(
        "{:>3}. {} [{}] {}",
        index + 1,
        mark,
        c.initial(),
        c.name
    );
    format!(
        "{}   zoom {} · {}",
        colorize_card(&label, card.eliminated),
        c.crop.zoom,
        c.crop.position_label()
    )
}

fn render(session: &GameSession) {
    println!();
    for (i, card) in session.cards().iter().enumerate() {
        println!("{}", card_line(i, card));
    }
    println!(
        "\nRemaining: {} / {}",
        session.remaining(),
        session.total()
    );
}

fn print_help() {
    println!("Commands:");
    println!("  <n> | t <n>   flip card n");
    println!("  s             shuffle the cards");
    println!("  r             restart (clear all flips)");
    println!("  b             show the board");
    println!("  q             quit");
}

/// Interactive loop over the commands read from `lines`.
fn run_session<I>(session: &mut GameSession, lines: &mut I, win_delay: Duration) -> AppResult<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut rng = rand::rng();
    render(session);
    print_help();

    loop {
        prompt("> ");
        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };

        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        let card_number = match (cmd, arg) {
            ("t" | "toggle", Some(n)) => n.parse::<usize>().ok(),
            (n, None) => n.parse::<usize>().ok(),
            _ => None,
        };

        if let Some(n) = card_number {
            let Some(index) = n.checked_sub(1) else {
                warning("Cards are numbered from 1.");
                continue;
            };
            let outcome = match session.toggle(index) {
                Ok(o) => o,
                Err(e) => {
                    warning(e);
                    continue;
                }
            };
            println!("{}", card_line(index, &session.cards()[index]));
            println!("Remaining: {} / {}", outcome.remaining, session.total());

            if outcome.won {
                thread::sleep(win_delay);
                if let Some(card) = session.winner() {
                    victory(format!(
                        "You Won! The mystery character is {}.",
                        card.character.name
                    ));
                }
            }
            continue;
        }

        match cmd {
            "" => {}
            "q" | "quit" | "exit" => break,
            "s" | "shuffle" => {
                session.shuffle(&mut rng);
                success("Characters shuffled!");
                render(session);
            }
            "r" | "restart" => {
                session.restart();
                success("Game restarted!");
                render(session);
            }
            "b" | "board" => render(session),
            "h" | "help" | "?" => print_help(),
            other => warning(format!("Unknown command '{}'. Type h for help.", other)),
        }
    }

    Ok(())
}

fn loaded_message(source: &BoardSource, board: &Board) -> String {
    match source {
        BoardSource::Example => "Loaded example board from bundled JSON.".to_string(),
        BoardSource::Stored(_) => format!("Loaded board \"{}\".", board.title),
    }
}

pub fn handle(
    board: Option<&str>,
    link: Option<&str>,
    example: bool,
    cfg: &Config,
) -> AppResult<()> {
    let store = open_store(cfg);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let source = if example {
        BoardSource::Example
    } else if let Some(id) = board {
        BoardSource::Stored(id.to_string())
    } else if let Some(link) = link {
        BoardSource::from_link(link)?.ok_or_else(|| {
            AppError::InvalidArgument(format!("the link '{}' carries no boardId", link))
        })?
    } else {
        pick_source(&store, &mut lines)?
    };

    let board = load_board(&source, &store, &cfg.example_source())?;

    header(&board.title);
    status(loaded_message(&source, &board), false);

    if board.characters.is_empty() {
        info("This board has no characters yet.");
        return Ok(());
    }

    let mut session = GameSession::new(&board);
    if cfg.flip_sound {
        session = session.with_hook(Box::new(TerminalBell));
    }

    run_session(
        &mut session,
        &mut lines,
        Duration::from_millis(cfg.win_delay_ms),
    )
}
