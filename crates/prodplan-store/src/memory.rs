//! 記憶體方案儲存

use prodplan_core::{Material, PlanError, ProductSettings, RecipeComponent, Result};
use uuid::Uuid;

use crate::scenario::{SavedScenario, ScenarioSummary};
use crate::store::ScenarioStore;

/// 記憶體實作（測試與不需落盤的呼叫端使用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    scenarios: Vec<SavedScenario>,
}

impl MemoryStore {
    /// 創建空的記憶體儲存
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前方案數量
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl ScenarioStore for MemoryStore {
    fn save(
        &mut self,
        name: &str,
        materials: &[Material],
        recipe: &[RecipeComponent],
        product_settings: &ProductSettings,
    ) -> Result<Uuid> {
        let scenario = SavedScenario::new(name.to_string(), materials, recipe, product_settings);
        let id = scenario.id;
        self.scenarios.push(scenario);

        tracing::debug!(%id, name, "方案已儲存（記憶體）");
        Ok(id)
    }

    fn list(&self) -> Vec<ScenarioSummary> {
        self.scenarios.iter().map(SavedScenario::summary).collect()
    }

    fn load(&self, id: Uuid) -> Result<SavedScenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(PlanError::ScenarioNotFound(id))
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        let index = self
            .scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or(PlanError::ScenarioNotFound(id))?;
        self.scenarios.remove(index);
        Ok(())
    }
}
