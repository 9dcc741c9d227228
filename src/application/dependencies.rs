use crate::adapters::in_memory;
use crate::ports::*;
use std::sync::Arc;

/// サービスの依存関係
///
/// エンティティ種別ごとに1つのストアを明示的に構築して注入する。
/// サービス関数はこの構造体を引数に取り、ストアを経由せずにデータへ触れることはない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub loan_repository: Arc<dyn LoanRepository>,
}

impl ServiceDependencies {
    /// 空のインメモリストアで依存関係を構築する
    pub fn in_memory() -> Self {
        Self {
            book_repository: Arc::new(in_memory::BookRepository::new()),
            user_repository: Arc::new(in_memory::UserRepository::new()),
            loan_repository: Arc::new(in_memory::LoanRepository::new()),
        }
    }
}
