//! Data models for the training portal API

mod department;
mod response;
mod training;
mod user;
mod user_training;

pub use department::{Department, NewDepartment};
pub use response::{Ack, ApiResponse, AuthPayload, ErrorBody, Pagination, UserPage};
pub use training::{DepartmentRef, NewTraining, Training};
pub use user::{LoginCredentials, ProfileUpdate, RegisterData, User, UserQuery};
pub use user_training::{ComplianceDashboard, DepartmentCompliance, UserTraining};
