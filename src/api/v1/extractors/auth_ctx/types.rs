/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が gate を通した結果を request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 誰のレコードを読む/書くかは、常にここの username で決める (body の username は信用しない)
 */
use crate::services::auth::UserIdentity;

#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub identity: UserIdentity,
}

impl AuthCtx {
    pub fn new(identity: UserIdentity) -> Self {
        Self { identity }
    }

    pub fn username(&self) -> &str {
        &self.identity.username
    }
}
