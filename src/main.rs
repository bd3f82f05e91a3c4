//! Navdrawer - a terminal application shell with a navigation drawer.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use navdrawer::{
    app::App,
    config::ShellConfig,
    input::{key_action, mouse_action},
    router::Route,
    ui::{self, ShellLayout},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "navdrawer", version)]
#[command(about = "A terminal application shell with a navigation drawer", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Width of the open drawer in columns
    #[arg(long, default_value_t = 30)]
    drawer_width: u16,

    /// Show and hide the drawer without sliding
    #[arg(long)]
    no_animation: bool,

    /// Print a single frame to stdout and exit
    #[arg(long)]
    snapshot: bool,

    /// Screen shown in the snapshot (home, profile, profile2, settings)
    #[arg(long, requires = "snapshot")]
    route: Option<Route>,

    /// Show the drawer open in the snapshot
    #[arg(long, requires = "snapshot")]
    drawer_open: bool,

    /// Snapshot width
    #[arg(long, default_value_t = 80)]
    cols: u16,

    /// Snapshot height
    #[arg(long, default_value_t = 24)]
    rows: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Navdrawer");
    }

    let mut config = ShellConfig::default().with_drawer_width(args.drawer_width);
    if args.no_animation {
        config = config.without_animation();
    }

    if args.snapshot {
        let mut app = App::new(config);
        if let Some(route) = args.route {
            app.navigate(route);
        }
        if args.drawer_open {
            app.toggle_drawer();
            app.drawer.settle();
        }
        println!("{}", ui::render_to_string(&app, args.cols, args.rows)?);
        tracing::info!(route = %app.router.active(), "Snapshot written");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Navdrawer exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let mut layout: Option<ShellLayout> = None;
        terminal.draw(|f| layout = Some(ui::draw(f, &app)))?;

        let tick_rate = app.config.poll_interval(app.is_animating());
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            let drawer_open = app.drawer.is_open();
            let action = match event::read()? {
                Event::Key(key) => key_action(key, drawer_open),
                Event::Mouse(mouse) => layout
                    .as_ref()
                    .and_then(|layout| mouse_action(mouse, layout, drawer_open)),
                _ => None,
            };

            if let Some(action) = action {
                tracing::debug!(?action, "input");
                app.handle(action);
            }

            if app.should_quit() {
                return Ok(());
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
