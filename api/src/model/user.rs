use kernel::model::{id::UserId, user::User};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
        } = value;
        Self {
            id: user_id,
            name,
            email,
        }
    }
}
