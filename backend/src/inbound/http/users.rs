//! Users API handlers.
//!
//! ```text
//! GET /users
//! POST /users {"name":"Alice","email":"alice@example.com"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::ports::CreateUserRequest;
use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
///
/// Both fields are optional at the wire level so missing values surface as
/// validation errors rather than extractor failures.
///
/// Example JSON:
/// `{"name":"Alice","email":"alice@example.com"}`
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserBody {
    /// Requested user name; must not be blank.
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Contact email; must not be blank.
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

impl From<CreateUserBody> for CreateUserRequest {
    fn from(value: CreateUserBody) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

/// List every stored user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "User store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Create a user and return the stored record with its assigned identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "User store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(user))
}
