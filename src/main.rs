use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use tampamuslim::ui::{self, Theme};
use tampamuslim::{events, report, App, Directory, Settings, Tab, Viewport};

#[derive(Parser, Debug)]
#[command(name = "tampamuslim")]
#[command(about = "Daily iqamah times for Tampa Bay area masjids")]
struct Args {
    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Venue file to use instead of the built-in directory
    #[arg(long)]
    venues: Option<PathBuf>,

    /// Preselect a venue by id (e.g. "istaba")
    #[arg(short, long)]
    venue: Option<String>,

    /// Section to open: prayers, events or about
    #[arg(short, long, default_value = "prayers", value_parser = parse_tab)]
    tab: Tab,

    /// Drawer breakpoint in logical pixels
    #[arg(long)]
    breakpoint: Option<u32>,

    /// Print the current section as text and exit
    #[arg(short, long, conflicts_with = "export")]
    print: bool,

    /// Export venues and their schedules to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    Tab::from_name(s).ok_or_else(|| format!("unknown section '{}' (prayers, events, about)", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log {
        init_logging(path)?;
    }

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(breakpoint) = args.breakpoint {
        settings.breakpoint = breakpoint;
    }
    if args.venues.is_some() {
        settings.venues = args.venues.clone();
    }

    let directory = match settings.venues {
        Some(ref path) => Directory::load(path)?,
        None => Directory::builtin(),
    };
    tracing::info!(venues = directory.len(), breakpoint = settings.breakpoint, "starting");

    // Non-interactive modes render without a viewport.
    if args.print || args.export.is_some() {
        let mut app = App::with_breakpoint(directory, None, settings.breakpoint);
        apply_initial_selection(&mut app, &args);

        if let Some(ref export_path) = args.export {
            app.export_state(export_path)?;
            println!("Exported prayer times to: {}", export_path.display());
        } else {
            print!("{}", report::render_text(&app));
        }
        return Ok(());
    }

    run_tui(directory, &settings, &args)
}

/// Route tracing output to a file so it does not corrupt the terminal.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn apply_initial_selection(app: &mut App, args: &Args) {
    if let Some(ref id) = args.venue {
        if app.directory().get(id).is_none() {
            tracing::warn!(venue = %id, "unknown venue id");
        }
        app.select_venue(id.clone());
    }
    if args.tab != Tab::Prayers {
        app.select_tab(args.tab);
    }
}

/// Run the interactive TUI
fn run_tui(directory: Directory, settings: &Settings, args: &Args) -> Result<()> {
    let (columns, _) = terminal::size()?;
    let viewport = Viewport::from_columns(columns, settings.cell_width);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::with_breakpoint(directory, Some(viewport), settings.breakpoint);
    app.theme = Theme::from_choice(settings.theme);
    apply_initial_selection(&mut app, args);

    // Resize events drive the drawer only while the loop runs.
    app.mount();
    let result = run_app(&mut terminal, &mut app, settings.cell_width);
    app.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cell_width: u16,
) -> Result<()> {
    let mut area = Rect::default();

    while app.running {
        terminal.draw(|frame| {
            area = frame.area();
            ui::render(frame, app);
        })?;

        // Short timeout so expired status messages are cleared
        if let Some(event) = events::poll_event(Duration::from_millis(250))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    events::handle_key_event(app, key)
                }
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse, area),
                Event::Resize(columns, _) => events::handle_resize(app, columns, cell_width),
                _ => {}
            }
        }
    }

    Ok(())
}
