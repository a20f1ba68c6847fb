//! 儲存方案模型

use chrono::{DateTime, Utc};
use prodplan_core::{Material, ProductSettings, RecipeComponent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一份具名、帶時間戳的輸入快照（原料、配方、產品參數）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScenario {
    /// 方案ID（儲存時生成）
    pub id: Uuid,

    /// 方案名稱
    pub name: String,

    /// 儲存時間
    pub date: DateTime<Utc>,

    /// 原料快照
    pub materials: Vec<Material>,

    /// 配方快照
    pub recipe: Vec<RecipeComponent>,

    /// 產品參數快照
    pub product_settings: ProductSettings,
}

impl SavedScenario {
    /// 創建新的方案快照
    pub fn new(
        name: String,
        materials: &[Material],
        recipe: &[RecipeComponent],
        product_settings: &ProductSettings,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            date: Utc::now(),
            materials: materials.to_vec(),
            recipe: recipe.to_vec(),
            product_settings: product_settings.clone(),
        }
    }

    /// 方案摘要
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id,
            name: self.name.clone(),
            date: self.date,
            material_count: self.materials.len(),
            recipe_component_count: self.recipe.len(),
        }
    }
}

/// 方案摘要（列表顯示用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// 方案ID
    pub id: Uuid,

    /// 方案名稱
    pub name: String,

    /// 儲存時間
    pub date: DateTime<Utc>,

    /// 原料筆數
    pub material_count: usize,

    /// 配方項筆數
    pub recipe_component_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_independent_copy() {
        let material = Material::new("Steel".to_string(), 100.0, "kg".to_string(), 8.0);
        let recipe = vec![RecipeComponent::new(material.id, 2.0)];
        let materials = vec![material];
        let settings = ProductSettings::new("Bracket".to_string(), 20.0);

        let scenario = SavedScenario::new("試產".to_string(), &materials, &recipe, &settings);

        assert_eq!(scenario.name, "試產");
        assert_eq!(scenario.materials, materials);
        assert_eq!(scenario.recipe, recipe);
        assert_eq!(scenario.product_settings, settings);
    }

    #[test]
    fn test_summary_counts() {
        let material = Material::new("Steel".to_string(), 100.0, "kg".to_string(), 8.0);
        let recipe = vec![RecipeComponent::new(material.id, 2.0)];
        let materials = vec![material];
        let settings = ProductSettings::new("Bracket".to_string(), 20.0);

        let scenario = SavedScenario::new("試產".to_string(), &materials, &recipe, &settings);
        let summary = scenario.summary();

        assert_eq!(summary.id, scenario.id);
        assert_eq!(summary.material_count, 1);
        assert_eq!(summary.recipe_component_count, 1);
    }
}
