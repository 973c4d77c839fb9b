//! Application state and main TUI logic

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;

use super::forms::{Form, FormKind};
use super::input::{InputMode, KeyBindings};
use crate::api::PortalClient;
use crate::auth::Session;
use crate::rules;
use crate::state::{DepartmentStore, TrainingStore, UserDirectory, UserTrainingStore};
use crate::validate;

/// How long a transient banner stays on screen
const BANNER_DURATION: Duration = Duration::from_secs(5);

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Trainings,
    TrainingDetail,
    Departments,
    DepartmentDetail,
    Users,
    UserDetail,
    Profile,
}

impl View {
    /// Roles allowed into this view. The tab bar and view switching both
    /// consult this, so a hidden tab is also an unreachable view.
    pub fn allowed_roles(&self) -> &'static [&'static str] {
        match self {
            View::Trainings | View::TrainingDetail => rules::MANAGER_ROLES,
            View::Departments | View::DepartmentDetail | View::Users | View::UserDetail => {
                rules::ADMIN_ROLES
            }
            View::Dashboard | View::Profile => rules::ANY_ROLE,
        }
    }

    /// The tab a view belongs under
    pub fn tab_root(&self) -> View {
        match self {
            View::TrainingDetail => View::Trainings,
            View::DepartmentDetail => View::Departments,
            View::UserDetail => View::Users,
            other => *other,
        }
    }
}

/// Fixed tab order; number keys match the labels
pub const TABS: &[(View, &str)] = &[
    (View::Dashboard, "Dashboard [1]"),
    (View::Trainings, "Trainings [2]"),
    (View::Departments, "Departments [3]"),
    (View::Users, "Users [4]"),
    (View::Profile, "Profile [5]"),
];

/// Main application struct
pub struct App {
    /// Portal API client
    pub client: Arc<PortalClient>,

    /// Authenticated session
    pub session: Session,

    /// Current view
    pub view: View,

    /// Key binding style
    pub key_bindings: KeyBindings,

    /// Input mode
    pub input_mode: InputMode,

    /// Search/filter query
    pub search_query: String,

    // Entity stores
    pub users: UserDirectory,
    pub departments: DepartmentStore,
    pub trainings: TrainingStore,
    pub user_trainings: UserTrainingStore,

    // Training list state
    pub filtered_trainings: Vec<usize>,
    pub training_index: usize,

    // Department list state
    pub filtered_departments: Vec<usize>,
    pub department_index: usize,

    // User list state (server-side filtered)
    pub user_index: usize,

    // Dashboard assignment list state
    pub my_training_index: usize,
    /// Managers/admins can flip the dashboard list to every record
    pub dashboard_all: bool,

    // Assignment editing in training detail
    pub assigning: bool,
    pub assign_checked: Vec<bool>,
    pub assign_index: usize,

    /// Active form overlay, if any
    pub form: Option<Form>,

    /// Feedback message
    pub message: Option<String>,
    message_since: Option<Instant>,

    /// When the oldest still-displayed store error appeared
    error_since: Option<Instant>,

    /// Should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance
    pub fn new(client: Arc<PortalClient>, session: Session, key_bindings: KeyBindings) -> Self {
        Self {
            client,
            session,
            view: View::Dashboard,
            key_bindings,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            users: UserDirectory::new(),
            departments: DepartmentStore::new(),
            trainings: TrainingStore::new(),
            user_trainings: UserTrainingStore::new(),
            filtered_trainings: Vec::new(),
            training_index: 0,
            filtered_departments: Vec::new(),
            department_index: 0,
            user_index: 0,
            my_training_index: 0,
            dashboard_all: false,
            assigning: false,
            assign_checked: Vec::new(),
            assign_index: 0,
            form: None,
            message: None,
            message_since: None,
            error_since: None,
            should_quit: false,
        }
    }

    /// Tabs visible to the acting user's role
    pub fn visible_tabs(&self) -> Vec<(View, &'static str)> {
        TABS.iter()
            .filter(|(view, _)| rules::can_access(self.session.role(), view.allowed_roles()))
            .map(|(view, label)| (*view, *label))
            .collect()
    }

    /// Switch to a top-level view, loading its data on first entry.
    /// Rejected switches surface the same message the portal's web client
    /// uses for unauthorized routes.
    pub async fn switch_to(&mut self, view: View) {
        if !rules::can_access(self.session.role(), view.allowed_roles()) {
            self.set_message("You don't have permission to access this page.");
            return;
        }

        self.view = view;
        self.search_query.clear();

        match view {
            View::Dashboard => self.refresh_dashboard().await,
            View::Trainings => {
                if self.trainings.items().is_empty() {
                    self.load_trainings().await;
                }
                // Department names resolve against this cache
                if self.departments.items().is_empty() {
                    self.departments.load(&self.client.clone()).await;
                }
            }
            View::Departments => {
                if self.departments.items().is_empty() {
                    self.load_departments().await;
                }
            }
            View::Users => {
                if self.users.items().is_empty() {
                    self.load_users().await;
                }
            }
            View::Profile | View::TrainingDetail | View::DepartmentDetail | View::UserDetail => {}
        }
    }

    /// Load the dashboard: own assignments for everyone, aggregate
    /// compliance for managers and admins
    pub async fn refresh_dashboard(&mut self) {
        let client = self.client.clone();
        if self.dashboard_all {
            self.user_trainings.load_all(&client).await;
        } else {
            self.user_trainings.load_mine(&client).await;
        }
        if rules::can_access(self.session.role(), rules::MANAGER_ROLES) {
            self.user_trainings.load_dashboard(&client, None).await;
        }
        self.my_training_index = 0;
    }

    /// Flip the dashboard between own assignments and every record
    /// (manager/admin only; the gate matches the aggregate view)
    pub async fn toggle_dashboard_scope(&mut self) {
        if !rules::can_access(self.session.role(), rules::MANAGER_ROLES) {
            return;
        }
        self.dashboard_all = !self.dashboard_all;
        self.refresh_dashboard().await;
    }

    /// Re-fetch the authenticated profile from the server
    pub async fn reload_profile(&mut self) {
        match self.client.get_profile().await {
            Ok(user) => {
                self.session.replace_user(user);
                self.set_message("Profile refreshed");
            }
            Err(e) => self.set_message(&e.user_message("Failed to fetch profile")),
        }
    }

    /// Load trainings and rebuild the filtered index
    pub async fn load_trainings(&mut self) {
        let client = self.client.clone();
        self.trainings.load(&client).await;
        self.filter_trainings();
    }

    /// Load departments and rebuild the filtered index
    pub async fn load_departments(&mut self) {
        let client = self.client.clone();
        self.departments.load(&client).await;
        self.filter_departments();
    }

    /// Load the current user page
    pub async fn load_users(&mut self) {
        let client = self.client.clone();
        self.users.load(&client).await;
        self.user_index = 0;
    }

    /// Apply search filter to trainings
    pub fn filter_trainings(&mut self) {
        let query = self.search_query.to_lowercase();
        if query.is_empty() {
            self.filtered_trainings = (0..self.trainings.items().len()).collect();
        } else {
            self.filtered_trainings = self
                .trainings
                .items()
                .iter()
                .enumerate()
                .filter(|(_, t)| {
                    t.training_name.to_lowercase().contains(&query)
                        || t.content.to_lowercase().contains(&query)
                })
                .map(|(i, _)| i)
                .collect();
        }
        self.training_index = 0;
    }

    /// Apply search filter to departments
    pub fn filter_departments(&mut self) {
        let query = self.search_query.to_lowercase();
        if query.is_empty() {
            self.filtered_departments = (0..self.departments.items().len()).collect();
        } else {
            self.filtered_departments = self
                .departments
                .items()
                .iter()
                .enumerate()
                .filter(|(_, d)| {
                    d.name.to_lowercase().contains(&query)
                        || d.description.to_lowercase().contains(&query)
                })
                .map(|(i, _)| i)
                .collect();
        }
        self.department_index = 0;
    }

    /// The user list is filtered server-side; a search submits the query
    /// with the other filters kept
    pub async fn apply_user_search(&mut self) {
        let status = self.users.filters().status.clone();
        let role = self.users.filters().role.clone();
        let search = if self.search_query.is_empty() {
            None
        } else {
            Some(self.search_query.clone())
        };
        self.users.set_filters(status, role, search);
        self.load_users().await;
    }

    /// Cycle the server-side status filter: all -> active -> locked -> close
    pub async fn cycle_user_status_filter(&mut self) {
        let next = match self.users.filters().status.as_deref() {
            None => Some("active".to_string()),
            Some("active") => Some("locked".to_string()),
            Some("locked") => Some("close".to_string()),
            Some(_) => None,
        };
        let role = self.users.filters().role.clone();
        let search = self.users.filters().search.clone();
        self.users.set_filters(next, role, search);
        self.load_users().await;
    }

    /// Cycle the server-side role filter: all -> staff -> manager -> admin
    pub async fn cycle_user_role_filter(&mut self) {
        let next = match self.users.filters().role.as_deref() {
            None => Some("staff".to_string()),
            Some("staff") => Some("manager".to_string()),
            Some("manager") => Some("admin".to_string()),
            Some(_) => None,
        };
        let status = self.users.filters().status.clone();
        let search = self.users.filters().search.clone();
        self.users.set_filters(status, next, search);
        self.load_users().await;
    }

    pub async fn next_user_page(&mut self) {
        if self.users.next_page() {
            self.load_users().await;
        }
    }

    pub async fn prev_user_page(&mut self) {
        if self.users.prev_page() {
            self.load_users().await;
        }
    }

    /// Get currently selected training
    pub fn get_selected_training(&self) -> Option<&crate::models::Training> {
        self.filtered_trainings
            .get(self.training_index)
            .and_then(|&i| self.trainings.items().get(i))
    }

    /// Get currently selected department
    pub fn get_selected_department(&self) -> Option<&crate::models::Department> {
        self.filtered_departments
            .get(self.department_index)
            .and_then(|&i| self.departments.items().get(i))
    }

    /// Get currently selected user
    pub fn get_selected_user(&self) -> Option<&crate::models::User> {
        self.users.items().get(self.user_index)
    }

    /// Get the selected assignment on the dashboard
    pub fn get_selected_my_training(&self) -> Option<&crate::models::UserTraining> {
        self.user_trainings.items().get(self.my_training_index)
    }

    /// Enter detail view for the selected training. The focus entity is
    /// always fetched by id, never copied out of the list.
    pub async fn enter_training_detail(&mut self) {
        let Some(id) = self.get_selected_training().map(|t| t.id.clone()) else {
            return;
        };
        self.view = View::TrainingDetail;
        self.assigning = false;
        let client = self.client.clone();
        self.trainings.load_one(&client, &id).await;
    }

    /// Enter detail view for the selected department
    pub async fn enter_department_detail(&mut self) {
        let Some(id) = self.get_selected_department().map(|d| d.id.clone()) else {
            return;
        };
        self.view = View::DepartmentDetail;
        let client = self.client.clone();
        self.departments.load_one(&client, &id).await;
    }

    /// Enter detail view for the selected user
    pub async fn enter_user_detail(&mut self) {
        let Some(id) = self.get_selected_user().map(|u| u.id.clone()) else {
            return;
        };
        self.view = View::UserDetail;
        let client = self.client.clone();
        self.users.load_one(&client, &id).await;
        // Department name on the detail card resolves from this cache
        if self.departments.items().is_empty() {
            self.departments.load(&self.client.clone()).await;
        }
    }

    /// Go back from detail view, tearing the focus down so a later
    /// navigation never shows a stale entity
    pub fn go_back(&mut self) {
        match self.view {
            View::TrainingDetail => {
                self.trainings.clear_focus();
                self.assigning = false;
                self.view = View::Trainings;
                self.search_query.clear();
            }
            View::DepartmentDetail => {
                self.departments.clear_focus();
                self.view = View::Departments;
                self.search_query.clear();
            }
            View::UserDetail => {
                self.users.clear_focus();
                self.view = View::Users;
                self.search_query.clear();
            }
            _ => {}
        }
    }

    /// Navigate up in the current list
    pub fn navigate_up(&mut self) {
        match self.view {
            View::Dashboard => {
                if self.my_training_index > 0 {
                    self.my_training_index -= 1;
                }
            }
            View::Trainings => {
                if self.training_index > 0 {
                    self.training_index -= 1;
                }
            }
            View::TrainingDetail => {
                if self.assigning && self.assign_index > 0 {
                    self.assign_index -= 1;
                }
            }
            View::Departments => {
                if self.department_index > 0 {
                    self.department_index -= 1;
                }
            }
            View::Users => {
                if self.user_index > 0 {
                    self.user_index -= 1;
                }
            }
            _ => {}
        }
    }

    /// Navigate down in the current list
    pub fn navigate_down(&mut self) {
        match self.view {
            View::Dashboard => {
                let len = self.user_trainings.items().len();
                if len > 0 && self.my_training_index < len - 1 {
                    self.my_training_index += 1;
                }
            }
            View::Trainings => {
                if !self.filtered_trainings.is_empty()
                    && self.training_index < self.filtered_trainings.len() - 1
                {
                    self.training_index += 1;
                }
            }
            View::TrainingDetail => {
                if self.assigning
                    && !self.assign_checked.is_empty()
                    && self.assign_index < self.assign_checked.len() - 1
                {
                    self.assign_index += 1;
                }
            }
            View::Departments => {
                if !self.filtered_departments.is_empty()
                    && self.department_index < self.filtered_departments.len() - 1
                {
                    self.department_index += 1;
                }
            }
            View::Users => {
                if !self.users.items().is_empty() && self.user_index < self.users.items().len() - 1 {
                    self.user_index += 1;
                }
            }
            _ => {}
        }
    }

    /// Enter assignment-edit mode on the focused training, checkboxes
    /// prefilled from its current assignment list
    pub async fn begin_assign(&mut self) {
        if self.view != View::TrainingDetail {
            return;
        }
        if self.users.items().is_empty() {
            let client = self.client.clone();
            self.users.load(&client).await;
        }
        let Some(training) = self.trainings.focus() else {
            return;
        };
        self.assign_checked = self
            .users
            .items()
            .iter()
            .map(|u| training.users.contains(&u.id))
            .collect();
        self.assign_index = 0;
        self.assigning = true;
    }

    /// Toggle the assignment checkbox under the cursor
    pub fn toggle_assign(&mut self) {
        if let Some(checked) = self.assign_checked.get_mut(self.assign_index) {
            *checked = !*checked;
        }
    }

    /// Submit the assignment list; the cache takes the server's response,
    /// not the local selection
    pub async fn submit_assign(&mut self) {
        let Some(id) = self.trainings.focus().map(|t| t.id.clone()) else {
            return;
        };
        let user_ids: Vec<String> = self
            .users
            .items()
            .iter()
            .zip(&self.assign_checked)
            .filter(|(_, checked)| **checked)
            .map(|(u, _)| u.id.clone())
            .collect();

        let client = self.client.clone();
        if self.trainings.assign_users(&client, &id, user_ids).await {
            self.assigning = false;
            self.set_message("Assignments updated");
        }
    }

    /// Set the focused user's account status (admin action)
    pub async fn set_user_status(&mut self, status: &str) {
        let Some(id) = self.users.focus().map(|u| u.id.clone()) else {
            return;
        };
        let client = self.client.clone();
        if self.users.set_status(&client, &id, status).await {
            self.set_message(&format!("Status set to {}", status));
        }
    }

    /// Advance the selected assignment's progress on the dashboard:
    /// pending -> inprogress -> completed
    pub async fn advance_my_training(&mut self) {
        let Some(record) = self.get_selected_my_training() else {
            return;
        };
        let next = match record.status.as_str() {
            "pending" => "inprogress",
            "inprogress" => "completed",
            _ => return,
        };
        let id = record.id.clone();
        let client = self.client.clone();
        if self.user_trainings.set_status(&client, &id, next).await {
            self.set_message(&format!("Marked {}", next));
        }
    }

    /// Delete the selected training
    pub async fn delete_selected_training(&mut self) {
        let Some(id) = self.get_selected_training().map(|t| t.id.clone()) else {
            return;
        };
        let client = self.client.clone();
        if self.trainings.delete(&client, &id).await {
            self.filter_trainings();
            self.set_message("Training deleted");
        }
    }

    /// Delete the selected department
    pub async fn delete_selected_department(&mut self) {
        let Some(id) = self.get_selected_department().map(|d| d.id.clone()) else {
            return;
        };
        let client = self.client.clone();
        if self.departments.delete(&client, &id).await {
            self.filter_departments();
            self.set_message("Department deleted");
        }
    }

    /// Open a form overlay
    pub fn open_form(&mut self, form: Form) {
        self.form = Some(form);
        self.input_mode = InputMode::Form;
    }

    /// Close the form overlay without submitting
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Validate and submit the active form. Validation failures stay in
    /// the form's field error map and never reach a cache.
    pub async fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        let client = self.client.clone();
        let today = Local::now().date_naive();

        let submitted = match form.kind {
            FormKind::NewDepartment => {
                let body = form.to_department();
                let errors = validate::validate_department(&body);
                if !errors.is_empty() {
                    self.attach_form_errors(errors);
                    return;
                }
                let ok = self.departments.create(&client, &body).await;
                if ok {
                    self.filter_departments();
                    self.set_message("Department created");
                }
                ok
            }
            FormKind::EditDepartment => {
                let body = form.to_department();
                let errors = validate::validate_department(&body);
                if !errors.is_empty() {
                    self.attach_form_errors(errors);
                    return;
                }
                let Some(id) = form.target_id.clone() else {
                    return;
                };
                let ok = self.departments.update(&client, &id, &body).await;
                if ok {
                    self.filter_departments();
                    self.set_message("Department updated");
                }
                ok
            }
            FormKind::NewTraining => {
                let body = form.to_training(Vec::new());
                let errors = validate::validate_training(&body, today);
                if !errors.is_empty() {
                    self.attach_form_errors(errors);
                    return;
                }
                let ok = self.trainings.create(&client, &body).await;
                if ok {
                    self.filter_trainings();
                    self.set_message("Training created");
                }
                ok
            }
            FormKind::EditTraining => {
                let users = self
                    .trainings
                    .focus()
                    .map(|t| t.users.clone())
                    .unwrap_or_default();
                let body = form.to_training(users);
                let errors = validate::validate_training(&body, today);
                if !errors.is_empty() {
                    self.attach_form_errors(errors);
                    return;
                }
                let Some(id) = form.target_id.clone() else {
                    return;
                };
                let ok = self.trainings.update(&client, &id, &body).await;
                if ok {
                    self.filter_trainings();
                    self.set_message("Training updated");
                }
                ok
            }
            FormKind::NewUser => {
                let data = form.to_registration();
                let errors =
                    validate::validate_registration(&data, form.value("confirmPassword"));
                if !errors.is_empty() {
                    self.attach_form_errors(errors);
                    return;
                }
                let ok = self.users.create(&client, &data).await;
                if ok {
                    self.set_message("User created");
                }
                ok
            }
            FormKind::EditProfile => {
                let update = form.to_profile_update();
                let errors = validate::validate_profile(&update);
                if !errors.is_empty() {
                    self.attach_form_errors(errors);
                    return;
                }
                match client.update_profile(&update).await {
                    Ok(user) => {
                        self.session.replace_user(user);
                        self.set_message("Profile updated");
                        true
                    }
                    Err(e) => {
                        self.set_message(&e.user_message("Failed to update profile"));
                        false
                    }
                }
            }
        };

        if submitted {
            self.form = None;
            self.input_mode = InputMode::Normal;
        }
    }

    fn attach_form_errors(&mut self, errors: crate::validate::FieldErrors) {
        if let Some(form) = self.form.as_mut() {
            form.errors = errors;
        }
    }

    /// Export the current list under exports/
    pub fn export_current_list(&mut self) {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let today = Local::now().date_naive();

        let result = match self.view {
            View::Users => {
                if self.users.items().is_empty() {
                    self.set_message("No users to export");
                    return;
                }
                let path_str = format!("exports/users_{}.csv", timestamp);
                crate::export::export_users(
                    self.users.items(),
                    crate::export::ExportFormat::Csv,
                    std::path::Path::new(&path_str),
                )
            }
            View::Trainings => {
                if self.trainings.items().is_empty() {
                    self.set_message("No trainings to export");
                    return;
                }
                let path_str = format!("exports/trainings_{}.csv", timestamp);
                crate::export::export_trainings(
                    self.trainings.items(),
                    self.departments.items(),
                    today,
                    crate::export::ExportFormat::Csv,
                    std::path::Path::new(&path_str),
                )
            }
            _ => return,
        };

        match result {
            Ok(path) => self.set_message(&format!("Exported to {}", path)),
            Err(e) => self.set_message(&format!("Export failed: {}", e)),
        }
    }

    /// Set a transient status-bar message
    pub fn set_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.message_since = Some(Instant::now());
    }

    fn any_store_error(&self) -> bool {
        self.users.last_error().is_some()
            || self.departments.last_error().is_some()
            || self.trainings.last_error().is_some()
            || self.user_trainings.last_error().is_some()
    }

    /// Periodic housekeeping: error banners and messages auto-dismiss
    /// after five seconds
    pub fn tick(&mut self) {
        if self.any_store_error() {
            match self.error_since {
                None => self.error_since = Some(Instant::now()),
                Some(since) if since.elapsed() >= BANNER_DURATION => {
                    self.users.clear_error();
                    self.departments.clear_error();
                    self.trainings.clear_error();
                    self.user_trainings.clear_error();
                    self.error_since = None;
                }
                Some(_) => {}
            }
        } else {
            self.error_since = None;
        }

        if let Some(since) = self.message_since
            && since.elapsed() >= BANNER_DURATION
        {
            self.message = None;
            self.message_since = None;
        }
    }

    /// Dismiss banners immediately
    pub fn dismiss_banners(&mut self) {
        self.users.clear_error();
        self.departments.clear_error();
        self.trainings.clear_error();
        self.user_trainings.clear_error();
        self.error_since = None;
        self.message = None;
        self.message_since = None;
    }
}
