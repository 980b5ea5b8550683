use crate::model::id::UserId;

pub mod event;

/// 管理画面の利用者。ロールは持たず、ログインできれば全操作が可能。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}
