//! 方案儲存抽象

use prodplan_core::{Material, ProductSettings, RecipeComponent, Result};
use uuid::Uuid;

use crate::scenario::{SavedScenario, ScenarioSummary};

/// 方案儲存介面
///
/// `save` 永遠追加新快照，不覆蓋既有方案；`load`/`delete` 對不存在的
/// 方案回傳 `PlanError::ScenarioNotFound`。
pub trait ScenarioStore {
    /// 儲存一份具名快照，回傳生成的方案ID
    fn save(
        &mut self,
        name: &str,
        materials: &[Material],
        recipe: &[RecipeComponent],
        product_settings: &ProductSettings,
    ) -> Result<Uuid>;

    /// 列出方案摘要（依儲存順序）
    fn list(&self) -> Vec<ScenarioSummary>;

    /// 依ID載入方案
    fn load(&self, id: Uuid) -> Result<SavedScenario>;

    /// 依ID刪除方案
    fn delete(&mut self, id: Uuid) -> Result<()>;
}
