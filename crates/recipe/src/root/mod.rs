use std::ops::Deref;

mod create;
mod delete;

pub use create::CreateInput;

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
}
