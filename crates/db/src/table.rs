use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Name,
    NameLower,
    Instructions,
    PrepTime,
    Cuisine,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Ingredient {
    Table,
    Id,
    RecipeId,
    Amount,
    Name,
}

#[derive(Iden, Clone, Copy)]
pub enum Tag {
    Table,
    Id,
    Name,
    NameLower,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeTag {
    Table,
    RecipeId,
    TagId,
}

#[derive(Iden, Clone, Copy)]
pub enum Comment {
    Table,
    Id,
    RecipeId,
    UserId,
    Rating,
    Text,
    CreatedAt,
}
