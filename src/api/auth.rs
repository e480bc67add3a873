//! Auth Endpoints
//!
//! Login, signup and the signed-in user's profile.

use serde::de::IgnoredAny;

use super::ApiClient;
use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, UserProfile};

pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    api.post_json("/login/", request).await
}

/// Create an account; the response body is not needed
pub async fn signup(api: &ApiClient, request: &SignupRequest) -> Result<(), AppError> {
    api.post_json::<_, IgnoredAny>("/signup/", request).await?;
    Ok(())
}

pub async fn user_profile(api: &ApiClient) -> Result<UserProfile, AppError> {
    api.get("/user-profile/").await
}
