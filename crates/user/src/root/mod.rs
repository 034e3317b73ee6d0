use std::ops::Deref;

use crate::repository::{self, FindType, UserRow};

mod login;
mod register;

pub use login::{INVALID_LOGIN, LoginInput};
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: cookbook_shared::State,
}

impl Deref for Command {
    type Target = cookbook_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: cookbook_shared::State) -> Self {
        Self { state }
    }

    pub async fn find(&self, id: i64) -> cookbook_shared::Result<Option<User>> {
        Ok(repository::find(&self.read_db, FindType::Id(id))
            .await?
            .map(User::from))
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> cookbook_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Username(username.into())).await?;

        Ok(row.map(User::from))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
        }
    }
}
