//! One-shot notices shown on the next rendered page.

use axum_extra::extract::{CookieJar, cookie::Cookie};
use strum::{Display, EnumString};

pub const NOTICE_COOKIE_NAME: &str = "notice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Notice {
    Registered,
    LoggedIn,
    LoggedOut,
    RecipeAdded,
    RecipeDeleted,
    CommentAdded,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Registered => "Registration successful! Please log in.",
            Notice::LoggedIn => "Welcome back!",
            Notice::LoggedOut => "You have been logged out.",
            Notice::RecipeAdded => "Recipe added successfully!",
            Notice::RecipeDeleted => "Recipe deleted.",
            Notice::CommentAdded => "Comment added!",
        }
    }
}

pub fn set(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(
        Cookie::build((NOTICE_COOKIE_NAME, notice.to_string()))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Read the pending notice and clear its cookie. Unknown codes are dropped.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE_NAME) else {
        return (jar, None);
    };

    let notice = cookie.value().parse().ok();

    (jar.remove(Cookie::build(NOTICE_COOKIE_NAME).path("/")), notice)
}
