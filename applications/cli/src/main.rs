//! flashdeck - study a deck of flashcards from the terminal
use anyhow::Context;
use clap::Parser;
use flashdeck_cli::{commands::HELP, config::StudyConfig, display, run_commands};
use flashdeck_core::Deck;
use flashdeck_importer::DeckLoader;
use flashdeck_playback::{
    resolve_player_path, AudioPlayback, AutoplayScheduler, FfplayLauncher, StudySession,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flashdeck")]
#[command(version, about = "Study a deck of flashcards with optional audio and autoplay", long_about = None)]
struct Cli {
    /// Deck file; relative sound paths are resolved against its directory
    #[arg(short = 'p', long = "path-to-deck")]
    deck: Option<PathBuf>,

    /// Shuffle the deck at start
    #[arg(short, long)]
    shuffle: bool,

    /// Remove duplicate cards before building the deck
    #[arg(short, long)]
    remove_duplicates: bool,

    /// Seconds before a card flips (minimum 2)
    #[arg(short = 'l', long)]
    fliptime: Option<f64>,

    /// Seconds between a flip and the next card (minimum 2)
    #[arg(short = 'w', long)]
    switchtime: Option<f64>,

    /// Audio player binary
    #[arg(short = 'u', long = "path-to-ffplay")]
    player: Option<PathBuf>,

    /// Base path prepended to relative sound references
    #[arg(short = 'b', long)]
    sound_base: Option<String>,

    /// Field separator in the deck file
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Configuration file (default: ./flashdeck.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command-line values win over file and environment
    fn apply(self, config: &mut StudyConfig) {
        if let Some(deck) = self.deck {
            config.deck.path = Some(deck);
        }
        if self.shuffle {
            config.deck.shuffle = true;
        }
        if self.remove_duplicates {
            config.deck.remove_duplicates = true;
        }
        if let Some(fliptime) = self.fliptime {
            config.autoplay.fliptime = fliptime;
        }
        if let Some(switchtime) = self.switchtime {
            config.autoplay.switchtime = switchtime;
        }
        if let Some(player) = self.player {
            config.audio.player = Some(player);
        }
        if let Some(base) = self.sound_base {
            config.deck.sound_base = Some(base);
        }
        if let Some(delimiter) = self.delimiter {
            config.deck.delimiter = delimiter.to_string();
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, stdout is the card display)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flashdeck=info,flashdeck_importer=info,flashdeck_playback=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = StudyConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    let deck = load_deck(&config)?;
    if deck.is_empty() {
        println!("{}", display::NO_DATA);
    }

    let player = resolve_player_path(config.audio.player.as_deref());
    tracing::info!("Audio player: {}", player.display());
    let audio = AudioPlayback::new(FfplayLauncher::new(player));

    let (session, events) = StudySession::new(deck, audio);
    let session = Arc::new(session);
    let mut autoplay = AutoplayScheduler::new(Arc::clone(&session), config.timing())
        .with_events(session.event_sender());

    // Display thread; ends once every event sender is gone
    let display_thread = thread::Builder::new()
        .name("flashdeck-display".to_string())
        .spawn(move || {
            for event in events {
                println!("{}", display::render(&event));
            }
        })
        .context("Failed to start display thread")?;

    println!("{}", HELP);
    session.announce();

    let result = run_commands(io::stdin().lock(), &mut io::stdout(), &session, &mut autoplay);

    autoplay.shutdown();
    drop(autoplay);
    session.shutdown();
    drop(session);

    if display_thread.join().is_err() {
        tracing::error!("Display thread panicked");
    }

    result.context("Failed to read commands")
}

fn load_deck(config: &StudyConfig) -> anyhow::Result<Deck> {
    let Some(path) = &config.deck.path else {
        return Ok(Deck::empty());
    };

    let loader = DeckLoader::new(config.load_options()?);
    let deck = loader
        .load_file(path, config.deck.sound_base.as_deref())
        .with_context(|| format!("Failed to load deck {}", path.display()))?;

    tracing::info!("Deck ready: {} cards", deck.len());
    Ok(deck)
}
