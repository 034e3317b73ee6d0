use cookbook_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

pub enum FindType {
    Id(i64),
    Username(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> cookbook_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([User::Id, User::Username, User::Email, User::Password])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Username(username) => {
            statement.and_where(Expr::col(User::Username).eq(username))
        }
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    username: String,
    email: Option<String>,
    password: String,
) -> cookbook_shared::Result<i64> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Username,
            User::Email,
            User::Password,
            User::CreatedAt,
        ])
        .values_panic([
            username.into(),
            email.into(),
            password.into(),
            cookbook_shared::now().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    // The unique indexes still guard against a concurrent registration.
    let result = match sqlx::query_with(&sql, values).execute(pool).await {
        Ok(result) => result,
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            cookbook_shared::conflict!("User already exists!");
        }
        Err(err) => return Err(err.into()),
    };

    Ok(result.last_insert_rowid())
}
