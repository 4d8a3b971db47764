//! User directory handlers.
//!
//! ```text
//! GET    /api/v1/user?email=i.i.ivanov@mail.com
//! POST   /api/v1/user {"name":"New","email":"new@mail.com"}
//! DELETE /api/v1/user?email=new@mail.com
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::schemas::{ErrorResponse, UserSchema};
use super::state::HttpState;
use super::validation::{
    EMAIL_FIELD, NAME_FIELD, missing_field_error, parse_email, user_validation_error,
};
use super::ApiResult;
use crate::domain::{EmailAddress, Error, NewUser, User, UserName};

/// Query string addressing a single user.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email of the target user. Required.
    #[param(example = "i.i.ivanov@mail.com")]
    pub email: Option<String>,
}

/// Request body for `POST /api/v1/user`.
///
/// Example JSON: `{"name":"Sidor Sidorov","email":"s.sidorov@mail.com"}`
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Sidor Sidorov")]
    pub name: Option<String>,
    #[schema(example = "s.sidorov@mail.com")]
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let name = value.name.ok_or_else(|| missing_field_error(NAME_FIELD))?;
        let email = value.email.ok_or_else(|| missing_field_error(EMAIL_FIELD))?;
        let name = UserName::new(name).map_err(user_validation_error)?;
        let email = EmailAddress::new(email).map_err(user_validation_error)?;
        Ok(NewUser::new(name, email))
    }
}

/// Fetch a user by email.
#[utoipa::path(
    get,
    path = "/api/v1/user",
    params(EmailQuery),
    responses(
        (status = 200, description = "User found", body = UserSchema),
        (status = 404, description = "No user with this email", body = ErrorResponse),
        (status = 422, description = "Missing or malformed email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user")]
pub async fn get_user(
    state: web::Data<HttpState>,
    query: web::Query<EmailQuery>,
) -> ApiResult<web::Json<User>> {
    let email = parse_email(query.into_inner().email)?;
    let user = state.users.find_user(&email).await?;
    Ok(web::Json(user))
}

/// Register a new user and return its identifier.
#[utoipa::path(
    post,
    path = "/api/v1/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created; body is the new id", body = u64, example = json!(3)),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner())?;
    let created = state.users.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(created.id().get()))
}

/// Permanently remove a user by email.
#[utoipa::path(
    delete,
    path = "/api/v1/user",
    params(EmailQuery),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this email", body = ErrorResponse),
        (status = 422, description = "Missing or malformed email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    query: web::Query<EmailQuery>,
) -> ApiResult<HttpResponse> {
    let email = parse_email(query.into_inner().email)?;
    state.users.delete_user(&email).await?;
    Ok(HttpResponse::NoContent().finish())
}
