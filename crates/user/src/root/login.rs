use cookbook_shared::FILL_ALL_FIELDS;

use crate::{password, repository};

pub const INVALID_LOGIN: &str = "Invalid login!";

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl super::Command {
    /// Check credentials and return the user id the session is bound to.
    pub async fn login(&self, input: LoginInput) -> cookbook_shared::Result<i64> {
        let username = input.username.trim();

        if username.is_empty() || input.password.is_empty() {
            cookbook_shared::invalid!("{FILL_ALL_FIELDS}");
        }

        let Some(user_row) = repository::find(
            &self.read_db,
            repository::FindType::Username(username.to_owned()),
        )
        .await?
        else {
            cookbook_shared::unauthorized!("{INVALID_LOGIN}");
        };

        if !password::verify_password(&input.password, &user_row.password)? {
            cookbook_shared::unauthorized!("{INVALID_LOGIN}");
        }

        tracing::info!(user_id = user_row.id, "user logged in");

        Ok(user_row.id)
    }
}
