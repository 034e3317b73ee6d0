mod add;

pub use add::AddCommentInput;
