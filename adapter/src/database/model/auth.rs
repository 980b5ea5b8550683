use crate::redis::model::{RedisKey, RedisValue};
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use shared::error::{AppError, AppResult};
use std::str::FromStr;

// パスワード照合用に users テーブルから取り出す行
#[derive(sqlx::FromRow)]
pub struct UserItem {
    pub user_id: UserId,
    pub password_hash: String,
}

pub struct AuthorizationKey(String);
pub struct AuthorizedUserId(UserId);

pub fn from(event: CreateToken) -> (AuthorizationKey, AuthorizedUserId) {
    (
        AuthorizationKey(event.access_token.0),
        AuthorizedUserId(event.user_id),
    )
}

impl From<AuthorizationKey> for AccessToken {
    fn from(key: AuthorizationKey) -> Self {
        Self(key.0)
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(token: AccessToken) -> Self {
        Self(token.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("access-token:{}", self.0)
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        Ok(Self(UserId::from_str(&s)?))
    }
}

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_event_splits_into_key_and_user_id() {
        let user_id = UserId::new();
        let event = CreateToken::new(user_id);
        let token = event.access_token.clone();

        let (key, value) = from(event);
        assert_eq!(key.inner(), format!("access-token:{}", token.0));
        assert_eq!(value.inner(), user_id.to_string());

        let restored = AuthorizedUserId::try_from(value.inner()).unwrap();
        assert_eq!(restored.into_inner(), user_id);
        assert_eq!(AccessToken::from(key), token);
    }
}
