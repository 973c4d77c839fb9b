//! UI rendering components

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs, Wrap},
};

use super::app::{App, View};
use super::input::InputMode;
use crate::rules::{self, Compliance};

/// Render the complete UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header/tabs
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if app.input_mode == InputMode::Search {
        render_search_popup(frame, app);
    }
    if app.input_mode == InputMode::Form {
        render_form_popup(frame, app);
    }
}

/// Render the header with the role-gated navigation tabs
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = app.visible_tabs();
    let titles: Vec<&str> = tabs.iter().map(|(_, label)| *label).collect();
    let selected = tabs
        .iter()
        .position(|(view, _)| *view == app.view.tab_root())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Trainhub "))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the main content area. Each view carves off an error banner
/// when its store holds one.
fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let error = match app.view.tab_root() {
        View::Dashboard => app.user_trainings.last_error(),
        View::Trainings => app.trainings.last_error(),
        View::Departments => app.departments.last_error(),
        View::Users => app.users.last_error(),
        _ => None,
    }
    .map(|e| e.to_string());

    let body = if let Some(message) = error {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        render_error_banner(frame, &message, chunks[0]);
        chunks[1]
    } else {
        area
    };

    match app.view {
        View::Dashboard => render_dashboard(frame, app, body),
        View::Trainings => render_training_list(frame, app, body),
        View::TrainingDetail => render_training_detail(frame, app, body),
        View::Departments => render_department_list(frame, app, body),
        View::DepartmentDetail => render_department_detail(frame, app, body),
        View::Users => render_user_list(frame, app, body),
        View::UserDetail => render_user_detail(frame, app, body),
        View::Profile => render_profile(frame, app, body),
    }
}

/// Dismissible error banner; also auto-dismissed after five seconds
fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .title_bottom(" m: Dismiss "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

fn loading(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// A fetch-by-id that resolved to nothing: distinct from loading and from
/// the error banner
fn not_found(frame: &mut Frame, what: &str, area: Rect) {
    let widget = Paragraph::new(format!("{} not found", what))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title_bottom(" Esc: Back "));
    frame.render_widget(widget, area);
}

fn badge_span(badge: rules::Badge) -> Span<'static> {
    Span::styled(badge.label, Style::default().fg(badge.color))
}

/// Render the dashboard: compliance aggregates for managers and admins,
/// own assignments for everyone
fn render_dashboard(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.user_trainings.is_pending() && app.user_trainings.items().is_empty() {
        loading(frame, area);
        return;
    }

    let area = if let Some(dashboard) = app.user_trainings.dashboard() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(area);

        let mut lines = vec![
            format!(
                "Total users: {}   Compliant: {}   Pending trainings: {}   Expired certifications: {}",
                dashboard.total_users,
                dashboard.compliant_users,
                dashboard.pending_trainings,
                dashboard.expired_certifications
            ),
            String::new(),
        ];
        for row in &dashboard.department_compliance {
            lines.push(format!(
                "{:<24} {:>3}/{:<3} ({:.0}%)",
                row.department, row.compliant, row.total, row.percentage
            ));
        }

        let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let summary = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(" Compliance "))
            .wrap(Wrap { trim: false });
        frame.render_widget(summary, chunks[0]);
        chunks[1]
    } else {
        area
    };

    let today = Local::now().date_naive();
    let items: Vec<ListItem> = app
        .user_trainings
        .items()
        .iter()
        .map(|record| {
            let badge = rules::progress_badge(&record.status);
            let retraining = record.retraining_date.as_deref().unwrap_or("-");
            let line = Line::from(vec![
                Span::raw(format!(
                    "{:<36} ",
                    record.content.as_deref().unwrap_or(&record.training_id)
                )),
                badge_span(badge),
                Span::raw("  retraining: "),
                Span::styled(
                    retraining.to_string(),
                    Style::default().fg(match record.retraining_date.as_deref() {
                        Some(date) => rules::deadline_color(date, today),
                        None => Color::DarkGray,
                    }),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = if app.dashboard_all {
        format!(" All Training Records ({}) ", app.user_trainings.items().len())
    } else {
        format!(" My Trainings ({}) ", app.user_trainings.items().len())
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(" ↑↓ Navigate │ s: Advance Status │ v: My/All │ q: Quit "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.my_training_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the training list view
fn render_training_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.trainings.is_pending() && app.trainings.items().is_empty() {
        loading(frame, area);
        return;
    }

    let today = Local::now().date_naive();
    let header = Row::new(vec!["Name", "Department", "Valid Until", "Days Left", "Status", "Assigned"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .filtered_trainings
        .iter()
        .filter_map(|&idx| app.trainings.items().get(idx))
        .map(|training| {
            let compliance = Compliance::classify(&training.last_date, today);
            let days = rules::days_remaining(&training.last_date, today)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());

            Row::new(vec![
                training.training_name.clone(),
                rules::resolve_department(&training.department, app.departments.items()),
                training.last_date.clone(),
                days,
                compliance.label().to_string(),
                training.users.len().to_string(),
            ])
            .style(Style::default().fg(compliance.color()))
        })
        .collect();

    let title = format!(
        " Trainings ({}/{}) ",
        app.filtered_trainings.len(),
        app.trainings.items().len()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(20),
            Constraint::Percentage(14),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(" Enter: Details │ c: New │ d: Delete │ e: Export │ /: Search │ q: Quit "),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(50, 50, 80))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(app.training_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Render training detail view
fn render_training_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(training) = app.trainings.focus() else {
        if app.trainings.is_pending() {
            loading(frame, area);
        } else {
            not_found(frame, "Training", area);
        }
        return;
    };

    if app.assigning {
        render_assign_list(frame, app, area);
        return;
    }

    let today = Local::now().date_naive();
    let compliance = Compliance::classify(&training.last_date, today);
    let days = rules::days_remaining(&training.last_date, today);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(training.training_name.clone())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let deadline_note = match days {
        Some(d) if d < 0 => format!("{} ({} days overdue)", training.last_date, -d),
        Some(d) => format!("{} ({} days remaining)", training.last_date, d),
        None => training.last_date.clone(),
    };

    let info = vec![
        Line::from(format!(
            "Department:  {}",
            rules::resolve_department(&training.department, app.departments.items())
        )),
        Line::from(format!("Content:     {}", training.content)),
        Line::from(vec![
            Span::raw(format!("Valid until: {}  ", deadline_note)),
            Span::styled(compliance.label(), Style::default().fg(compliance.color())),
        ]),
        Line::from(format!(
            "Created:     {}",
            training.created_at.as_deref().unwrap_or("-")
        )),
        Line::from(format!(
            "Updated:     {}",
            training.updated_at.as_deref().unwrap_or("-")
        )),
    ];

    let details = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false });
    frame.render_widget(details, chunks[1]);

    // Assigned users, names resolved opportunistically from the user cache
    let items: Vec<ListItem> = training
        .users
        .iter()
        .map(|user_id| {
            let label = app
                .users
                .items()
                .iter()
                .find(|u| &u.id == user_id)
                .map(|u| format!("{} ({})", u.get_display_name(), u.emp_no))
                .unwrap_or_else(|| user_id.clone());
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Assigned Users ({}) ", training.users.len()))
            .title_bottom(" u: Edit │ a: Assignments │ Esc: Back "),
    );
    frame.render_widget(list, chunks[2]);
}

/// Render the assignment checkbox list
fn render_assign_list(frame: &mut Frame, app: &App, area: Rect) {
    let selected_count = app.assign_checked.iter().filter(|&&c| c).count();

    let items: Vec<ListItem> = app
        .users
        .items()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_checked = app.assign_checked.get(i).copied().unwrap_or(false);
            let checkbox = if is_checked { "[✓]" } else { "[ ]" };
            let content = format!("{} {} ({})", checkbox, user.get_display_name(), user.emp_no);

            let style = if is_checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let title = format!(" Assign Users ({} selected) ", selected_count);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(" Space: Toggle │ Enter: Save │ Esc: Cancel "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.assign_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the department list view
fn render_department_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.departments.is_pending() && app.departments.items().is_empty() {
        loading(frame, area);
        return;
    }

    let header = Row::new(vec!["Name", "Description"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .filtered_departments
        .iter()
        .filter_map(|&idx| app.departments.items().get(idx))
        .map(|dept| Row::new(vec![dept.name.clone(), dept.description.clone()]))
        .collect();

    let title = format!(
        " Departments ({}/{}) ",
        app.filtered_departments.len(),
        app.departments.items().len()
    );

    let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(" Enter: Details │ c: New │ d: Delete │ /: Search │ q: Quit "),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(app.department_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Render department detail view
fn render_department_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(dept) = app.departments.focus() else {
        if app.departments.is_pending() {
            loading(frame, area);
        } else {
            not_found(frame, "Department", area);
        }
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let info = vec![
        Line::from(Span::styled(
            dept.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(dept.description.clone()),
        Line::from(format!("Created: {}", dept.created_at.as_deref().unwrap_or("-"))),
        Line::from(format!("Updated: {}", dept.updated_at.as_deref().unwrap_or("-"))),
    ];

    let details = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title(" Department "))
        .wrap(Wrap { trim: false });
    frame.render_widget(details, chunks[0]);

    // Trainings belonging to this department, read from the training cache
    let today = Local::now().date_naive();
    let dept_id = dept.id.clone();
    let items: Vec<ListItem> = app
        .trainings
        .items()
        .iter()
        .filter(|t| t.department.id() == dept_id)
        .map(|t| {
            let compliance = Compliance::classify(&t.last_date, today);
            let line = Line::from(vec![
                Span::raw(format!("{:<36} {}  ", t.training_name, t.last_date)),
                Span::styled(compliance.label(), Style::default().fg(compliance.color())),
            ]);
            ListItem::new(line)
        })
        .collect();

    let count = items.len();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Trainings in Department ({}) ", count))
            .title_bottom(" u: Edit │ Esc: Back "),
    );
    frame.render_widget(list, chunks[1]);
}

/// Render the user list view
fn render_user_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.users.is_pending() && app.users.items().is_empty() {
        loading(frame, area);
        return;
    }

    let header = Row::new(vec!["Emp No", "Name", "Email", "Role", "Status"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .users
        .items()
        .iter()
        .map(|user| {
            let role = rules::role_badge(&user.role);
            let status = rules::user_status_badge(&user.status);
            Row::new(vec![
                Cell::from(user.emp_no.clone()),
                Cell::from(user.get_display_name()),
                Cell::from(user.email.clone()),
                Cell::from(Span::styled(role.label, Style::default().fg(role.color))),
                Cell::from(Span::styled(status.label, Style::default().fg(status.color))),
            ])
        })
        .collect();

    let pagination = app
        .users
        .pagination()
        .map(|p| format!("page {}/{}, {} total", p.current_page, p.total_pages, p.total_items))
        .unwrap_or_else(|| format!("{} loaded", app.users.items().len()));

    let filters = app.users.filters();
    let mut filter_note = String::new();
    if let Some(status) = filters.status.as_deref() {
        filter_note.push_str(&format!(" [status: {}]", status));
    }
    if let Some(role) = filters.role.as_deref() {
        filter_note.push_str(&format!(" [role: {}]", role));
    }

    let title = format!(" Users ({}){} ", pagination, filter_note);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(12),
            Constraint::Percentage(26),
            Constraint::Percentage(30),
            Constraint::Percentage(14),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(" Enter: Details │ c: New │ f: Status │ r: Role │ n/p: Page │ e: Export │ /: Search "),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(50, 50, 80))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(app.user_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Render user detail view
fn render_user_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(user) = app.users.focus() else {
        if app.users.is_pending() {
            loading(frame, area);
        } else {
            not_found(frame, "User", area);
        }
        return;
    };

    let role = rules::role_badge(&user.role);
    let status = rules::user_status_badge(&user.status);

    let info = vec![
        Line::from(vec![
            Span::styled(
                user.get_display_name(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge_span(role),
            Span::raw("  "),
            badge_span(status),
        ]),
        Line::from(String::new()),
        Line::from(format!("Employee No:   {}", user.emp_no)),
        Line::from(format!("Email:         {}", user.email)),
        Line::from(format!("Phone:         {}", user.phone.as_deref().unwrap_or("-"))),
        Line::from(format!("Address:       {}", user.address.as_deref().unwrap_or("-"))),
        Line::from(format!(
            "Date of birth: {}",
            user.date_of_birth.as_deref().unwrap_or("-")
        )),
        Line::from(format!(
            "Department:    {}",
            rules::department_name(user.department_id.as_deref(), app.departments.items())
        )),
        Line::from(format!(
            "Manager id:    {}",
            user.manager_id.as_deref().unwrap_or("-")
        )),
        Line::from(format!(
            "Last login:    {}",
            user.last_login.as_deref().unwrap_or("-")
        )),
        Line::from(format!(
            "Created:       {}",
            user.created_at.as_deref().unwrap_or("-")
        )),
        Line::from(format!(
            "Updated:       {}",
            user.updated_at.as_deref().unwrap_or("-")
        )),
    ];

    let paragraph = Paragraph::new(info)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" User ")
                .title_bottom(" a: Activate │ l: Lock │ x: Close Account │ Esc: Back "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the authenticated user's own profile
fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let user = app.session.user();
    let role = rules::role_badge(&user.role);

    let info = vec![
        Line::from(vec![
            Span::styled(
                user.get_display_name(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge_span(role),
        ]),
        Line::from(String::new()),
        Line::from(format!("Employee No:   {}", user.emp_no)),
        Line::from(format!("Email:         {}", user.email)),
        Line::from(format!("Phone:         {}", user.phone.as_deref().unwrap_or("-"))),
        Line::from(format!("Address:       {}", user.address.as_deref().unwrap_or("-"))),
        Line::from(format!(
            "Date of birth: {}",
            user.date_of_birth.as_deref().unwrap_or("-")
        )),
        Line::from(format!(
            "Department:    {}",
            rules::department_name(user.department_id.as_deref(), app.departments.items())
        )),
        Line::from(format!(
            "Last login:    {}",
            user.last_login.as_deref().unwrap_or("-")
        )),
    ];

    let paragraph = Paragraph::new(info)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Profile ")
                .title_bottom(" u: Edit Profile │ R: Refresh │ q: Quit "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let user = app.session.user();
    let role = rules::role_badge(&user.role);

    let pending = app.users.is_pending()
        || app.departments.is_pending()
        || app.trainings.is_pending()
        || app.user_trainings.is_pending();

    let state_indicator = if pending {
        Span::styled(" ● Syncing ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● Connected ", Style::default().fg(Color::Green))
    };

    let search_hint = if !app.search_query.is_empty() {
        format!(" │ Filter: {} ", app.search_query)
    } else {
        String::new()
    };

    let message = app
        .message
        .as_deref()
        .map(|m| format!(" │ {} ", m))
        .unwrap_or_default();

    let status = Line::from(vec![
        state_indicator,
        Span::raw(format!("│ {} ", app.client.base_url())),
        Span::raw(format!("│ {} ", user.get_display_name())),
        badge_span(role),
        Span::styled(search_hint, Style::default().fg(Color::Magenta)),
        Span::styled(message, Style::default().fg(Color::Yellow)),
    ]);

    let paragraph = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render search popup
fn render_search_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 3, frame.area());

    frame.render_widget(Clear, area);

    let input = Paragraph::new(app.search_query.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Enter to apply, Esc to cancel) ")
                .style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(input, area);

    // Show cursor
    frame.set_cursor_position((
        area.x + app.search_query.len() as u16 + 1,
        area.y + 1,
    ));
}

/// Render the active form overlay
fn render_form_popup(frame: &mut Frame, app: &App) {
    let Some(form) = &app.form else {
        return;
    };

    // One line per field plus room for an error line and the footer
    let height = (form.fields.len() as u16 * 2 + 4).min(frame.area().height.saturating_sub(2));
    let area = centered_rect(60, height, frame.area());

    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let shown = if field.secret {
            "•".repeat(field.value.len())
        } else {
            field.value.clone()
        };

        let style = if i == form.active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let cursor = if i == form.active { "▌" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{:<28} {}{}", field.label, shown, cursor),
            style,
        )));

        match form.errors.get(field.name) {
            Some(error) => lines.push(Line::from(Span::styled(
                format!("{:<28} {}", "", error),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from(String::new())),
        }
    }

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(form.title)
                .title_bottom(" Tab/↑↓: Fields │ Enter: Submit │ Esc: Cancel ")
                .style(Style::default().fg(Color::White)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(popup, area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
