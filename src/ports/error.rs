use thiserror::Error;

/// ストアポートのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 採番できるIDが残っていない
    ///
    /// 明示的に最大値付近のIDで保存された後に発生しうる。既存の行は変更されない。
    #[error("no {0} ids left to assign")]
    IdsExhausted(&'static str),
}

/// ストアポートの Result型
pub type StoreResult<T> = std::result::Result<T, StoreError>;
