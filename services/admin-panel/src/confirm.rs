//! Interactive confirmation before destructive actions

use async_trait::async_trait;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// Asks the operator a yes/no question
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
