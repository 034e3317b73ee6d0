use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use cookbook_shopping::ShoppingList;

use crate::{
    auth::AuthUser,
    routes::{AppState, RecipeId},
    template::Template,
};

/// `Content-Disposition` value for `{name}_shopping_list.pdf`. The plain `filename` keeps
/// printable ASCII only; `filename*` carries the exact UTF-8 name.
pub fn attachment_disposition(recipe_name: &str) -> String {
    let filename = format!("{recipe_name}_shopping_list.pdf");
    let ascii: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(&filename)
    )
}

pub async fn file(
    AuthUser(user): AuthUser,
    template: Template,
    State(app): State<AppState>,
    RecipeId(id): RecipeId,
) -> impl IntoResponse {
    let recipe = crate::try_page_response!(opt: app.recipe_query.find(id), template);

    let list = ShoppingList::new(
        &recipe.name,
        recipe
            .ingredients
            .iter()
            .map(|i| (i.amount.as_str(), i.name.as_str())),
    );

    match list.render_pdf() {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    attachment_disposition(&recipe.name),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(user_id = user.id, recipe_id = id, err = %err, "failed to render shopping list");

            template.server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_disposition() {
        assert_eq!(
            attachment_disposition("Apple Pie"),
            "attachment; filename=\"Apple Pie_shopping_list.pdf\"; filename*=UTF-8''Apple%20Pie_shopping_list.pdf"
        );
    }

    #[test]
    fn test_attachment_disposition_sanitizes_filename() {
        let value = attachment_disposition("Crème \"Brûlée\"");

        assert!(value.starts_with("attachment; filename=\"Cr_me _Br_l_e__shopping_list.pdf\";"));
        assert!(value.contains("filename*=UTF-8''Cr%C3%A8me%20%22Br%C3%BBl%C3%A9e%22_shopping_list.pdf"));
    }
}
