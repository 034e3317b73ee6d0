use cookbook_shared::FILL_ALL_FIELDS;
use validator::Validate;

use crate::{password, repository};

const USERNAME_MAX_LEN: usize = 100;

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Please fill out all fields!"))]
    pub username: String,
    #[validate(email(message = "Please enter a valid email address!"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Please fill out all fields!"))]
    pub password: String,
}

impl RegisterInput {
    fn normalize(self) -> Self {
        Self {
            username: self.username.trim().to_owned(),
            email: self
                .email
                .map(|email| email.trim().to_owned())
                .filter(|email| !email.is_empty()),
            password: self.password,
        }
    }
}

impl super::Command {
    pub async fn register(&self, input: RegisterInput) -> cookbook_shared::Result<i64> {
        let input = input.normalize();

        if input.password.trim().is_empty() {
            cookbook_shared::invalid!("{FILL_ALL_FIELDS}");
        }

        input.validate()?;

        if input.username.chars().count() > USERNAME_MAX_LEN {
            cookbook_shared::invalid!("Username must be at most {USERNAME_MAX_LEN} characters!");
        }

        if repository::find(
            &self.read_db,
            repository::FindType::Username(input.username.to_owned()),
        )
        .await?
        .is_some()
        {
            cookbook_shared::conflict!("User already exists!");
        }

        if let Some(email) = &input.email
            && repository::find(&self.read_db, repository::FindType::Email(email.to_owned()))
                .await?
                .is_some()
        {
            cookbook_shared::conflict!("Email already exists!");
        }

        let password_hash = password::hash_password(&input.password)?;
        let id = repository::create(&self.write_db, input.username, input.email, password_hash)
            .await?;

        tracing::info!(user_id = id, "user registered");

        Ok(id)
    }
}
