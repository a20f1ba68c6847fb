//! # Prodplan Core
//!
//! 核心資料模型與類型定義

pub mod material;
pub mod metrics;
pub mod product;
pub mod recipe;

// Re-export 主要類型
pub use material::{Inventory, Material};
pub use metrics::{BreakEven, MaterialUtilization, ProductionMetrics};
pub use product::ProductSettings;
pub use recipe::{Recipe, RecipeComponent};

/// 生產規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("找不到物料: {0}")]
    MaterialNotFound(uuid::Uuid),

    #[error("找不到配方項: {0}")]
    RecipeComponentNotFound(uuid::Uuid),

    #[error("配方中已存在該物料: {0}")]
    DuplicateRecipeComponent(uuid::Uuid),

    #[error("欄位不可為空: {0}")]
    BlankField(&'static str),

    #[error("找不到儲存方案: {0}")]
    ScenarioNotFound(uuid::Uuid),

    #[error("儲存 IO 錯誤: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("儲存格式錯誤: {0}")]
    StoreFormat(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
