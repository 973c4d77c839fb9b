//! Response envelopes shared across portal endpoints

use serde::Deserialize;

use super::User;

/// Standard `{success, data, message}` envelope
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "success")]
    pub success: bool,

    #[serde(rename = "data")]
    pub data: T,

    #[serde(rename = "message")]
    pub message: Option<String>,
}

/// Envelope for operations that return no data (delete)
#[derive(Debug, Deserialize)]
pub struct Ack {
    #[serde(rename = "success")]
    pub success: bool,

    #[serde(rename = "message")]
    pub message: Option<String>,
}

/// Error body shape; every field is optional on the wire
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "message")]
    pub message: Option<String>,
}

/// Login/register response payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    #[serde(rename = "user")]
    pub user: User,

    #[serde(rename = "token")]
    pub token: String,

    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Pagination metadata on the admin user list
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(rename = "currentPage")]
    pub current_page: u32,

    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    #[serde(rename = "totalItems")]
    pub total_items: u64,

    #[serde(rename = "itemsPerPage")]
    pub items_per_page: u32,

    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,

    #[serde(rename = "hasPreviousPage")]
    pub has_previous_page: bool,

    #[serde(rename = "offset")]
    pub offset: Option<u64>,
}

/// The admin user list arrives either wrapped (`{success, data, pagination}`)
/// or bare (`{data, pagination}`); both carry `data` and `pagination` at the
/// top level, so one shape covers both and `success` is simply ignored.
#[derive(Debug, Deserialize)]
pub struct UserPage {
    #[serde(rename = "data")]
    pub data: Vec<User>,

    #[serde(rename = "pagination")]
    pub pagination: Option<Pagination>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"
        {"id": "u1", "empNo": "E1", "fullName": "A", "email": "a@h.test",
         "role": "staff", "status": "active"}
    "#;

    #[test]
    fn test_wrapped_user_page() {
        let json = format!(
            r#"{{"success": true, "data": [{USER_JSON}], "pagination": {{
                "currentPage": 1, "totalPages": 4, "totalItems": 37,
                "itemsPerPage": 10, "hasNextPage": true, "hasPreviousPage": false
            }}}}"#
        );

        let page: UserPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.unwrap().total_pages, 4);
    }

    #[test]
    fn test_bare_user_page() {
        let json = format!(r#"{{"data": [{USER_JSON}]}}"#);

        let page: UserPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_auth_payload() {
        let json = format!(
            r#"{{"success": true, "data": {{
                "user": {USER_JSON}, "token": "jwt-abc", "refreshToken": "jwt-ref"
            }}}}"#
        );

        let response: ApiResponse<AuthPayload> = serde_json::from_str(&json).unwrap();
        assert!(response.success);
        assert_eq!(response.data.token, "jwt-abc");
        assert_eq!(response.data.refresh_token.as_deref(), Some("jwt-ref"));
    }

    #[test]
    fn test_error_body_without_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
