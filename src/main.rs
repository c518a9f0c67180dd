use anyhow::Result;
use crossterm::{
    event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{io, time::Duration};
use std::sync::Arc;
use tokio::sync::Mutex;

mod app;
mod constants;
mod mint;
mod transactions;
mod ui;
mod utils;
mod wallet;

use app::App;
use utils::NetworkState;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The app starts disconnected; the wallet is attached on demand
    let app = Arc::new(Mutex::new(App::new(NetworkState::new())));

    // Run the app
    let result = run_app(&mut terminal, Arc::clone(&app)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    loop {
        let app_arc = Arc::clone(&app);

        {
            let mut app_guard = app_arc.lock().await;
            terminal.draw(|f| ui::draw(f, &mut app_guard))?;
        }

        if crossterm_event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = crossterm_event::read()? {
                let mut app_guard = app_arc.lock().await;
                if app_guard.is_editing() {
                    // a text field is capturing input
                    match key.code {
                        KeyCode::Enter => app_guard.commit_edit(),
                        KeyCode::Esc => app_guard.cancel_edit(),
                        KeyCode::Backspace => app_guard.edit_backspace(),
                        KeyCode::Char(c) => app_guard.edit_char(c),
                        _ => {}
                    }
                } else if app_guard.is_switching_network {
                    match key.code {
                        KeyCode::Char('1') => app_guard.switch_to_network(0),
                        KeyCode::Char('2') => app_guard.switch_to_network(1),
                        KeyCode::Char('3') => app_guard.switch_to_network(2),
                        KeyCode::Esc | KeyCode::Char('n') => app_guard.cancel_network_switch(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        // wallet session
                        KeyCode::Char('c') => {
                            app_guard.connect().await;
                        }
                        KeyCode::Char('d') => {
                            app_guard.disconnect();
                        }
                        KeyCode::Char('r') => {
                            app_guard.refresh().await;
                        }
                        KeyCode::Char('n') => {
                            app_guard.start_network_switch();
                        }
                        // panel navigation
                        KeyCode::Tab => app_guard.next_section(),
                        KeyCode::BackTab => app_guard.previous_section(),
                        KeyCode::Up | KeyCode::Char('+') => app_guard.adjust_quantity(1),
                        KeyCode::Down | KeyCode::Char('-') => app_guard.adjust_quantity(-1),
                        KeyCode::Right => app_guard.next_custom_field(),
                        KeyCode::Enter => {
                            app_guard.begin_edit();
                        }
                        // mint the focused panel; the submission runs in
                        // its own task so the loop keeps drawing
                        KeyCode::Char('m') => {
                            let variant = app_guard.focus.variant();
                            drop(app_guard);
                            App::handle_mint(Arc::clone(&app_arc), variant);
                        }
                        _ => {
                            // clear any messages
                            app_guard.clear_error();
                        }
                    }
                }
            }
        }
    }
}
