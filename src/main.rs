use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use filmtime::config::AppConfig;
use filmtime::controller::{AppController, CommandLauncher};
use filmtime::logging;
use filmtime::model::{LocalHistoryStore, TemplateStreamResolver, TmdbClient, TmdbMovieRepository, TmdbShowsRepository};
use filmtime::usecase::UseCases;
use filmtime::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== filmtime starting ===");

    let config = AppConfig::load().context("failed to load configuration")?;
    let client = TmdbClient::new(&config.tmdb).context("failed to create TMDB client")?;

    let history = match LocalHistoryStore::open(&config.history.path).await {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(path = %config.history.path.display(), error = %e, "Could not read watch history, starting empty");
            LocalHistoryStore::new(&config.history.path)
        }
    };

    let use_cases = UseCases::new(
        Arc::new(TmdbMovieRepository::new(client.clone())),
        Arc::new(TmdbShowsRepository::new(client)),
        Arc::new(history),
        Arc::new(TemplateStreamResolver::new(config.stream.url_template.clone())),
    );
    let launcher = Box::new(CommandLauncher::new(config.player.command.clone()));

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = AppController::new(use_cases, launcher);

    let res = run_app(&mut terminal, &mut controller);
    controller.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("filmtime shutting down");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
) -> io::Result<()> {
    loop {
        controller.tick();

        let screen = controller.screen_view();
        terminal.draw(|f| {
            AppView::render(f, &screen, controller.ui_state());
        })?;

        // Short poll keeps the loading indicators moving
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key);
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
