use crate::domain::{User, UserId};
use crate::ports::StoreResult;
use async_trait::async_trait;

/// 利用者ストアポート
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Vec<User>;

    async fn find_by_id(&self, id: UserId) -> Option<User>;

    /// 利用者を保存する（ID未設定なら採番、設定済みなら置き換え）
    async fn save(&self, user: User) -> StoreResult<User>;

    async fn delete_by_id(&self, id: UserId);

    /// 名前に部分文字列を含む利用者を検索する
    async fn find_by_name(&self, name: &str) -> Vec<User>;

    /// メールアドレスが完全一致する最初の利用者を取得する
    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// ステータスが完全一致する利用者を検索する
    async fn find_by_status(&self, status: &str) -> Vec<User>;
}
