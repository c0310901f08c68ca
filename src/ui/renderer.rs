use crate::config::Config;
use crate::logger::Logger;
use crate::menu::ActionSet;
use crate::overflow::Debouncer;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Action, Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::sync::mpsc;

/// Set up the terminal, run the action bar until quit, and restore the terminal
pub async fn run_app(config: Config, set: ActionSet, logger: Logger) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, set, logger);
    app.init()?;
    let mut event_handler = EventHandler::new();
    let (mut debouncer, mut resize_rx) = Debouncer::new(config.layout.resize_debounce());

    log::info!("Action bar started");
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler, &mut debouncer, &mut resize_rx).await;

    // No resize may land after teardown
    debouncer.cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
    debouncer: &mut Debouncer<u16>,
    resize_rx: &mut mpsc::UnboundedReceiver<u16>,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            // Keep drawing until the bar has settled its measurement
            needs_render = app.needs_layout_pass();
        }

        tokio::select! {
            event = event_handler.next_event() => match event? {
                EventType::Key(key) => {
                    let action = app.handle_key_events(key);
                    if app.update(action) != Action::None {
                        needs_render = true;
                    }
                }
                EventType::Resize(width, _) => {
                    debouncer.call(width);
                    // The terminal still needs repainting at the new size
                    needs_render = true;
                }
                EventType::Tick | EventType::Other => {}
            },
            Some(width) = resize_rx.recv() => {
                log::debug!("Resize settled at {} columns", width);
                app.update(Action::ResizeSettled(width));
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
