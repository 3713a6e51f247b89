use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: format!("user-{}", uuid::Uuid::new_v4().simple()),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Where the logged-in user lives. Handlers only see this trait.
pub trait SessionStore: Send {
    fn get(&self) -> Option<User>;
    fn set(&mut self, user: User);
    fn clear(&mut self);
}

#[derive(Debug, Default)]
pub struct InMemorySession {
    user: Option<User>,
}

impl SessionStore for InMemorySession {
    fn get(&self) -> Option<User> {
        self.user.clone()
    }

    fn set(&mut self, user: User) {
        self.user = Some(user);
    }

    fn clear(&mut self) {
        self.user = None;
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Demo login: any credentials are accepted.
pub fn login(req: LoginRequest) -> User {
    User::new("测试用户", req.email)
}

pub fn register(req: RegisterRequest) -> Result<User, ApiError> {
    if req.password != req.confirm_password {
        return Err(ApiError::PasswordMismatch);
    }
    Ok(User::new(req.name, req.email))
}
