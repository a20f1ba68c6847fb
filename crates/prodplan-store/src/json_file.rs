//! JSON 檔案方案儲存

use std::fs;
use std::path::{Path, PathBuf};

use prodplan_core::{Material, PlanError, ProductSettings, RecipeComponent, Result};
use uuid::Uuid;

use crate::scenario::{SavedScenario, ScenarioSummary};
use crate::store::ScenarioStore;

/// 檔案實作：整份方案列表以單一 JSON 文件落盤
///
/// `open` 讀入既有文件（不存在時從空列表開始），之後每次變動即重寫
/// 整個檔案。方案列表的規模是人工儲存的快照，不做增量寫入。
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    scenarios: Vec<SavedScenario>,
}

impl JsonFileStore {
    /// 開啟儲存檔案
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let scenarios = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), count = scenarios.len(), "方案儲存已開啟");

        Ok(Self { path, scenarios })
    }

    /// 儲存檔案路徑
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 將目前列表重寫到檔案
    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.scenarios)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl ScenarioStore for JsonFileStore {
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
        self.persist()?;

        tracing::info!(%id, name, path = %self.path.display(), "方案已儲存");
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
        self.persist()
    }
}
