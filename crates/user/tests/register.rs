use cookbook_shared::Error;
use cookbook_user::RegisterInput;
use temp_dir::TempDir;

mod helpers;

fn input(username: &str, email: Option<&str>, password: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_owned(),
        email: email.map(str::to_owned),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn validate_unique_usernames() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = cookbook_user::Command::new(state);

    let first = cmd.register(input("john", None, "my_password")).await?;
    let second = cmd.register(input("john", None, "my_password_v2")).await;

    assert!(matches!(second, Err(Error::Conflict(_))));
    assert_eq!(second.unwrap_err().to_string(), "User already exists!");

    let user = cmd.find(first).await?.unwrap();
    assert_eq!(user.username, "john");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user")
        .fetch_one(&cmd.read_db)
        .await?;
    assert_eq!(count.0, 1);

    Ok(())
}

#[tokio::test]
async fn validate_unique_emails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = cookbook_user::Command::new(state);

    cmd.register(input("john", Some("john@cookbook.localhost"), "pass"))
        .await?;
    let resp = cmd
        .register(input("johnny", Some("john@cookbook.localhost"), "pass"))
        .await;

    assert_eq!(resp.unwrap_err().to_string(), "Email already exists!");

    Ok(())
}

#[tokio::test]
async fn validate_required_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = cookbook_user::Command::new(state);

    for resp in [
        cmd.register(input("", None, "pass")).await,
        cmd.register(input("   ", None, "pass")).await,
        cmd.register(input("john", None, "")).await,
        cmd.register(input("john", None, "  ")).await,
    ] {
        let err = resp.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Please fill out all fields!");
    }

    let resp = cmd.register(input("john", Some("not-an-email"), "pass")).await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Please enter a valid email address!"
    );

    Ok(())
}

#[tokio::test]
async fn register_trims_and_hashes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = cookbook_user::Command::new(state);

    let id = cmd
        .register(input("  ann  ", Some("   "), "my_password"))
        .await?;
    let user = cmd.find(id).await?.unwrap();

    assert_eq!(user.username, "ann");
    assert_eq!(user.email, None);

    let stored: (String,) = sqlx::query_as("SELECT password FROM user WHERE id = ?")
        .bind(id)
        .fetch_one(&cmd.read_db)
        .await?;
    assert_ne!(stored.0, "my_password");
    assert!(stored.0.starts_with("$argon2"));

    Ok(())
}

#[tokio::test]
async fn validate_username_length() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = cookbook_user::Command::new(state);

    let resp = cmd.register(input(&"a".repeat(101), None, "pass")).await;
    let err = resp.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.to_string(), "Username must be at most 100 characters!");

    let id = cmd.register(input(&"ż".repeat(100), None, "pass")).await?;
    assert_eq!(cmd.find(id).await?.unwrap().username.chars().count(), 100);

    Ok(())
}
