pub const FILL_ALL_FIELDS: &str = "Please fill out all fields!";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Auth(String),

    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = value.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .iter()
            .flat_map(|(_, errors)| errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| FILL_ALL_FIELDS.to_owned());

        Self::Validation(message)
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!(value.to_string()))
    }
}

#[macro_export]
macro_rules! invalid {
    ($($arg:tt)*) => {
        return Err($crate::Error::Validation(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! conflict {
    ($($arg:tt)*) => {
        return Err($crate::Error::Conflict(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! unauthorized {
    ($($arg:tt)*) => {
        return Err($crate::Error::Auth(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    () => {
        return Err($crate::Error::NotFound)
    };
}

#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::Server(format!($($arg)*)))
    };
}
