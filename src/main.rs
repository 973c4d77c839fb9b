//! Trainhub - a TUI console for a hospital staff training portal
//!
//! Connects to the portal's REST API and provides:
//! - A compliance dashboard and your own training assignments
//! - Training management with user assignment
//! - Department and user administration (role-gated)

mod api;
mod auth;
mod config;
mod export;
mod models;
mod rules;
mod state;
mod ui;
mod validate;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::PortalClient;
use crate::auth::Session;
use crate::models::{LoginCredentials, RegisterData};
use crate::ui::{App, Form, InputMode, KeyBindings, View};

/// Trainhub - Training Portal Console
#[derive(Parser, Debug)]
#[command(name = "trainhub")]
#[command(about = "A terminal UI for a hospital staff training and compliance portal")]
#[command(version)]
struct Args {
    /// Portal API base URL (e.g., https://portal.hospital.example/api)
    #[arg(short, long, env = "TRAINHUB_SERVER")]
    server: Option<String>,

    /// Login email (prompted when omitted)
    #[arg(short, long, env = "TRAINHUB_EMAIL")]
    email: Option<String>,

    /// Create a new account instead of logging in
    #[arg(long, default_value = "false")]
    register: bool,

    /// Use vim-style keybindings (j/k navigation)
    #[arg(long, default_value = "false")]
    vim: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (for debugging, set RUST_LOG=debug)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    // Resolve the server: flag first, then the last-used one
    let mut config = config::Config::load().unwrap_or_default();
    let server = match args.server.clone().or_else(|| config.current_server.clone()) {
        Some(server) => server,
        None => bail!("No portal URL configured. Pass --server or set TRAINHUB_SERVER."),
    };
    config.add_server(server.clone());
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save config: {}", e);
    }

    // Create API client and authenticate before starting the TUI
    let client = Arc::new(PortalClient::new(&server));

    eprintln!("Connecting to {}...", server);
    let session = if args.register {
        register_account(&client).await?
    } else {
        login(&client, args.email.clone()).await?
    };
    eprintln!("Signed in as {}.", session.user().get_display_name());

    // Set up key bindings
    let key_bindings = if args.vim {
        KeyBindings::Vim
    } else {
        KeyBindings::Arrows
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(client, session, key_bindings);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {:?}", e);
    }

    Ok(())
}

/// Prompt-and-login flow. Validation runs locally before any request.
async fn login(client: &PortalClient, email: Option<String>) -> Result<Session> {
    let email = match email {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    let password = prompt_secret("Password: ")?;

    let credentials = LoginCredentials { email, password };
    let errors = validate::validate_login(&credentials);
    if let Some((_, message)) = errors.iter().next() {
        bail!("{}", message);
    }

    Session::login(client, &credentials)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Login failed")))
        .context("Could not sign in to the portal")
}

/// Interactive self-registration flow
async fn register_account(client: &PortalClient) -> Result<Session> {
    eprintln!("Create a new account");
    let data = RegisterData {
        emp_no: prompt("Employee number: ")?,
        full_name: prompt("Full name: ")?,
        email: prompt("Email: ")?,
        password: prompt_secret("Password: ")?,
        role: "staff".to_string(),
        department_id: none_if_empty(prompt("Department id (optional): ")?),
        manager_id: none_if_empty(prompt("Manager id (optional): ")?),
        address: prompt("Address: ")?,
        phone: prompt("Phone: ")?,
        date_of_birth: prompt("Date of birth (YYYY-MM-DD): ")?,
    };
    let confirm = prompt_secret("Confirm password: ")?;

    let errors = validate::validate_registration(&data, &confirm);
    if !errors.is_empty() {
        for (field, message) in errors.iter() {
            eprintln!("  {}: {}", field, message);
        }
        bail!("Registration input is invalid");
    }

    Session::create_account(client, &data)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Registration failed")))
        .context("Could not create the account")
}

fn none_if_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

fn prompt(label: &str) -> Result<String> {
    eprint!("{}", label);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read a line without echoing, using raw-mode key events
fn prompt_secret(label: &str) -> Result<String> {
    eprint!("{}", label);
    io::stderr().flush()?;

    enable_raw_mode()?;
    let mut value = String::new();
    let result = loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter => break Ok(value.clone()),
                KeyCode::Backspace => {
                    value.pop();
                }
                KeyCode::Esc => break Ok(String::new()),
                KeyCode::Char(c) => value.push(c),
                _ => {}
            },
            _ => {}
        }
    };
    disable_raw_mode()?;
    eprintln!();

    result
}

/// Main event loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Load initial data
    app.refresh_dashboard().await;

    loop {
        // Banner housekeeping (5s auto-dismiss)
        app.tick();

        // Render
        terminal.draw(|f| ui::components::render(f, app))?;

        // Handle events with timeout
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => handle_normal_mode(app, key.code).await,
                    InputMode::Search => handle_search_mode(app, key.code).await,
                    InputMode::Form => handle_form_mode(app, key.code).await,
                }

                if app.should_quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle input in normal mode
async fn handle_normal_mode(app: &mut App, key: KeyCode) {
    // Global shortcuts
    match key {
        KeyCode::Char('q') => {
            // Only quit from main views, go back from detail views
            match app.view {
                View::TrainingDetail | View::DepartmentDetail | View::UserDetail => app.go_back(),
                _ => app.should_quit = true,
            }
            return;
        }
        KeyCode::Char('/') => {
            if matches!(app.view, View::Trainings | View::Departments | View::Users) {
                app.input_mode = InputMode::Search;
                app.search_query.clear();
            }
            return;
        }
        KeyCode::Esc => {
            if app.assigning {
                app.assigning = false;
            } else {
                app.go_back();
            }
            return;
        }
        KeyCode::Char('m') => {
            app.dismiss_banners();
            return;
        }
        KeyCode::Char('1') => {
            app.switch_to(View::Dashboard).await;
            return;
        }
        KeyCode::Char('2') => {
            app.switch_to(View::Trainings).await;
            return;
        }
        KeyCode::Char('3') => {
            app.switch_to(View::Departments).await;
            return;
        }
        KeyCode::Char('4') => {
            app.switch_to(View::Users).await;
            return;
        }
        KeyCode::Char('5') => {
            app.switch_to(View::Profile).await;
            return;
        }
        _ => {}
    }

    // View-specific action keys, before the navigation bindings so that
    // vim's h/l cannot shadow them
    match app.view {
        View::Dashboard => match key {
            KeyCode::Char('s') => {
                app.advance_my_training().await;
                return;
            }
            KeyCode::Char('v') => {
                app.toggle_dashboard_scope().await;
                return;
            }
            _ => {}
        },
        View::Trainings => match key {
            KeyCode::Char('c') => {
                app.open_form(Form::new_training());
                return;
            }
            KeyCode::Char('d') => {
                app.delete_selected_training().await;
                return;
            }
            KeyCode::Char('e') => {
                app.export_current_list();
                return;
            }
            _ => {}
        },
        View::TrainingDetail => match key {
            KeyCode::Char(' ') if app.assigning => {
                app.toggle_assign();
                return;
            }
            KeyCode::Enter if app.assigning => {
                app.submit_assign().await;
                return;
            }
            KeyCode::Char('a') => {
                app.begin_assign().await;
                return;
            }
            KeyCode::Char('u') => {
                if let Some(training) = app.trainings.focus() {
                    let form = Form::edit_training(training);
                    app.open_form(form);
                }
                return;
            }
            _ => {}
        },
        View::Departments => match key {
            KeyCode::Char('c') => {
                app.open_form(Form::new_department());
                return;
            }
            KeyCode::Char('d') => {
                app.delete_selected_department().await;
                return;
            }
            _ => {}
        },
        View::DepartmentDetail => {
            if key == KeyCode::Char('u') {
                if let Some(department) = app.departments.focus() {
                    let form = Form::edit_department(department);
                    app.open_form(form);
                }
                return;
            }
        }
        View::Users => match key {
            KeyCode::Char('c') => {
                app.open_form(Form::new_user());
                return;
            }
            KeyCode::Char('f') => {
                app.cycle_user_status_filter().await;
                return;
            }
            KeyCode::Char('r') => {
                app.cycle_user_role_filter().await;
                return;
            }
            KeyCode::Char('n') => {
                app.next_user_page().await;
                return;
            }
            KeyCode::Char('p') => {
                app.prev_user_page().await;
                return;
            }
            KeyCode::Char('e') => {
                app.export_current_list();
                return;
            }
            _ => {}
        },
        View::UserDetail => match key {
            KeyCode::Char('a') => {
                app.set_user_status("active").await;
                return;
            }
            KeyCode::Char('l') => {
                app.set_user_status("locked").await;
                return;
            }
            KeyCode::Char('x') => {
                app.set_user_status("close").await;
                return;
            }
            _ => {}
        },
        View::Profile => match key {
            KeyCode::Char('u') => {
                let form = Form::edit_profile(app.session.user());
                app.open_form(form);
                return;
            }
            KeyCode::Char('R') => {
                app.reload_profile().await;
                return;
            }
            _ => {}
        },
    }

    // Navigation
    if app.key_bindings.is_up(key) {
        app.navigate_up();
        return;
    }
    if app.key_bindings.is_down(key) {
        app.navigate_down();
        return;
    }

    // Enter to select
    if key == KeyCode::Enter {
        match app.view {
            View::Trainings => app.enter_training_detail().await,
            View::Departments => app.enter_department_detail().await,
            View::Users => app.enter_user_detail().await,
            _ => {}
        }
    }
}

/// Handle input in search mode
async fn handle_search_mode(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            // Apply filter based on current view
            match app.view {
                View::Trainings => app.filter_trainings(),
                View::Departments => app.filter_departments(),
                View::Users => app.apply_user_search().await,
                _ => {}
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_query.clear();
            // Reset filters
            match app.view {
                View::Trainings => app.filter_trainings(),
                View::Departments => app.filter_departments(),
                View::Users => app.apply_user_search().await,
                _ => {}
            }
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
        }
        _ => {}
    }
}

/// Handle input in form mode
async fn handle_form_mode(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form().await,
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.form.as_mut() {
                form.next_field();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form.as_mut() {
                form.prev_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form.as_mut() {
                form.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.form.as_mut() {
                form.input(c);
            }
        }
        _ => {}
    }
}
