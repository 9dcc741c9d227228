use serde::{Deserialize, Serialize};

use super::{Entity, UserId};

/// 図書館の利用者
///
/// メールアドレスは一意であることを想定しているが、ストアでは強制しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl User {
    /// ID未採番の利用者を作成する
    pub fn new(name: impl Into<String>, email: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            status: status.into(),
        }
    }

    /// 部分更新を適用する（IDは変更しない）
    pub fn apply_patch(self, patch: UserPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            email: patch.email.unwrap_or(self.email),
            status: patch.status.unwrap_or(self.status),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    const KIND: &'static str = "user";

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn set_id(&mut self, id: UserId) {
        self.id = Some(id);
    }
}

/// 利用者の部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}
