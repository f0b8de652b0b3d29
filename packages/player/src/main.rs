use std::io::Write;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::sync::broadcast;

use phonics_core::catalog::{animals, families, letters, numbers, sentences, vocab};
use phonics_core::{Catalog, Key, SessionEvent, SessionMachine, SessionProfile};
use phonics_player::config::Config;
use phonics_player::driver::{SessionDriver, SessionHandle};
use phonics_player::events::PlayerEvent;
use phonics_player::playback::engines::{ConsoleEngine, NullEngine};
use phonics_player::playback::{PlaybackController, SpeechParams};
use phonics_player::{logging, settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Screen {
    Letters,
    Cvc,
    Vocab,
    Numbers,
    Sentences,
    Animals,
}

#[derive(Parser)]
#[command(name = "phonics-player", about = "Terminal demo of the learning session player")]
struct Args {
    /// Learning screen to run.
    #[arg(value_enum, default_value = "letters")]
    screen: Screen,

    /// Category filter (vocab, sentences) or family id (cvc).
    #[arg(long)]
    category: Option<String>,

    /// Suppress auto-narration for this run.
    #[arg(long)]
    quiet: bool,

    /// Deterministic shuffle order.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without any narration engine.
    #[arg(long)]
    silent: bool,
}

fn build_screen(screen: Screen, category: Option<&str>) -> (Catalog, SessionProfile) {
    match screen {
        Screen::Letters => (letters::full_alphabet(), SessionProfile::letters()),
        Screen::Cvc => {
            let family = category
                .and_then(families::family_by_id)
                .unwrap_or(&families::families()[0]);
            (family.catalog(), SessionProfile::cvc())
        }
        Screen::Vocab => (
            vocab::vocab_catalog(category.and_then(vocab::VocabCategory::parse)),
            SessionProfile::vocab(),
        ),
        Screen::Numbers => (numbers::numbers_catalog(), SessionProfile::numbers()),
        Screen::Sentences => (
            sentences::sentences_catalog(category.and_then(sentences::SentenceCategory::parse)),
            SessionProfile::sentences(),
        ),
        Screen::Animals => (animals::animals_catalog(), SessionProfile::animals()),
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let settings_path = config.settings_path.clone().or_else(settings::default_path);
    let mut stored = settings_path
        .as_deref()
        .map(settings::load)
        .unwrap_or_default();
    if args.quiet {
        stored.quiet = true;
    }

    let (catalog, profile) = build_screen(args.screen, args.category.as_deref());
    stored.selected_deck = catalog.id.clone();

    let mut machine = match args.seed {
        Some(seed) => SessionMachine::with_seed(catalog, profile, seed),
        None => SessionMachine::new(catalog, profile),
    };
    machine.set_quiet(stored.quiet);

    let controller = if args.silent {
        PlaybackController::new(Arc::new(NullEngine), Arc::new(NullEngine))
    } else {
        PlaybackController::new(Arc::new(ConsoleEngine), Arc::new(ConsoleEngine))
    };
    let params = SpeechParams {
        rate: stored.speed.rate(),
        ..SpeechParams::default()
    };

    let handle = SessionDriver::spawn(machine, controller, params);
    let catalog = Arc::new(handle.catalog().clone());
    let parts_screen = catalog.items().iter().any(|item| !item.parts.is_empty());

    print!("{}\r\n", handle.catalog().name);
    print!("arrows navigate · space shuffles · enter flips · letters/digits jump");
    if parts_screen {
        print!(" · digits tap parts");
    }
    print!(" · q quits\r\n\r\n");
    let _ = std::io::stdout().flush();

    if let Err(err) = run_ui(&handle, &catalog, parts_screen).await {
        tracing::error!(error = %err, "terminal ui failed");
    }

    handle.close().await;

    if let Some(path) = settings_path {
        if let Err(err) = settings::save(&path, &stored) {
            tracing::warn!(error = %err, "failed to persist settings");
        }
    }
}

async fn run_ui(
    handle: &SessionHandle,
    catalog: &Catalog,
    parts_screen: bool,
) -> std::io::Result<()> {
    enable_raw_mode()?;

    let (key_tx, mut key_rx) = tokio::sync::mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key_tx.send(key).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });

    let mut events = handle.subscribe();
    loop {
        tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else { break };
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    KeyCode::Left => handle.key(Key::Left),
                    KeyCode::Right => handle.key(Key::Right),
                    KeyCode::Char(' ') => handle.key(Key::Space),
                    KeyCode::Enter => handle.flip(),
                    KeyCode::Char(c) if parts_screen && c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            if digit >= 1 {
                                handle.tap_part((digit - 1) as usize);
                            }
                        }
                    }
                    KeyCode::Char(c) => handle.key(Key::Char(c)),
                    _ => {}
                }
            },
            event = events.recv() => match event {
                Ok(envelope) => render(catalog, &envelope.event),
                Err(broadcast::error::RecvError::Closed) => break,
                Err(_) => {}
            },
        }
    }

    disable_raw_mode()
}

fn render(catalog: &Catalog, event: &PlayerEvent) {
    let PlayerEvent::Session(event) = event else {
        return;
    };
    match event {
        SessionEvent::ItemShown { index } => {
            if let Some(item) = catalog.item(*index) {
                print!("\r\n\u{25b6} {}", item.display);
                if !item.parts.is_empty() {
                    let chunks: Vec<&str> =
                        item.parts.iter().map(|p| p.text.as_str()).collect();
                    print!("   [{}]", chunks.join(" "));
                }
                print!("\r\n");
            }
        }
        SessionEvent::PartCompleted { index, part } => {
            if let Some(text) = catalog
                .item(*index)
                .and_then(|item| item.parts.get(*part))
                .map(|p| p.text.as_str())
            {
                print!("  \u{2713} {text}\r\n");
            }
        }
        SessionEvent::ItemCompleted { .. } => {
            print!("  \u{2605} all sounds found!\r\n");
        }
        SessionEvent::ItemReset { .. } => {
            print!("  \u{21ba} try again\r\n");
        }
        SessionEvent::RevealChanged { index, revealed } => {
            if *revealed {
                if let Some(image) = catalog.item(*index).and_then(|item| item.image.as_ref()) {
                    print!("  \u{1f5bc} {image}\r\n");
                }
            }
        }
        SessionEvent::TrayCleared => {
            print!("  \u{2728} every letter visited\r\n");
        }
    }
    let _ = std::io::stdout().flush();
}
