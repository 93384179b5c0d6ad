// Abacus: a four-rod counting frame for the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use abacus_tty::config::{carry_delay_from_millis, load_settings, Settings};
use abacus_tty::devices::{
    CommandSpeech, FileIdentityStore, IdentityStore, MemoryIdentityStore, SilentSpeech,
    SpeechOutput, TerminalBell,
};
use abacus_tty::presentation::Verbosity;
use abacus_tty::session::{Collaborators, Session};
use abacus_tty::ui::App;
use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "abacus-tty", about = "A counting abacus for the terminal")]
struct Cli {
    /// Settings file (defaults to ./abacus.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Speak feedback after every move
    #[arg(long)]
    voice: bool,

    /// No bead clicks
    #[arg(long)]
    mute: bool,

    /// quiet, normal or chatty
    #[arg(long)]
    verbosity: Option<Verbosity>,

    /// Start straight away as this player
    #[arg(long)]
    player: Option<String>,

    #[arg(long)]
    carry_delay_ms: Option<u64>,

    /// Seed for the encouragement phrases
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (level from ABACUS_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not remember the player between runs
    #[arg(long)]
    no_persist: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if self.voice {
            settings.voice = true;
        }
        if self.mute {
            settings.sound = false;
        }
        if let Some(level) = self.verbosity {
            settings.verbosity = level;
        }
        if let Some(ms) = self.carry_delay_ms {
            settings.carry_delay = carry_delay_from_millis(ms);
        }
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("ABACUS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn open_identity(settings: &Settings, no_persist: bool) -> Box<dyn IdentityStore> {
    if no_persist {
        return Box::new(MemoryIdentityStore::new());
    }
    let opened = FileIdentityStore::default_path(settings.data_dir.as_deref())
        .and_then(FileIdentityStore::open);
    match opened {
        Ok(store) => {
            info!(path = %store.path().display(), "remembering players");
            Box::new(store)
        }
        Err(err) => {
            warn!(error = %err, "player name will not be remembered");
            Box::new(MemoryIdentityStore::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut settings = load_settings(cli.config.as_deref())?;
    cli.apply(&mut settings);
    info!(?settings, "starting");

    let speech: Box<dyn SpeechOutput> = match &settings.speech_command {
        Some(program) => Box::new(CommandSpeech::new(program.clone())),
        None => Box::new(SilentSpeech),
    };
    let collaborators = Collaborators {
        identity: open_identity(&settings, cli.no_persist),
        speech,
        tone: Box::new(TerminalBell),
    };
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut session = Session::new(&settings, collaborators, rng);
    if let Some(player) = &cli.player {
        session.choose_user(player);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, settings.players.clone());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
