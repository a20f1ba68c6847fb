//! 配方（單層 BOM）模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PlanError, Result};

/// 配方項：生產一單位產品消耗的某原料用量
///
/// `material_id` 是對 `Material.id` 的非擁有引用，解析時需顯式查找；
/// 原料被刪除後引用可能懸空，屬於正常生命週期而非錯誤。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeComponent {
    /// 配方項ID
    pub id: Uuid,

    /// 引用的物料ID
    pub material_id: Uuid,

    /// 每單位產品用量
    pub amount_per_unit: f64,
}

impl RecipeComponent {
    /// 創建新的配方項
    pub fn new(material_id: Uuid, amount_per_unit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_id,
            amount_per_unit,
        }
    }

    /// 建構器模式：設置用量
    pub fn with_amount_per_unit(mut self, amount_per_unit: f64) -> Self {
        self.amount_per_unit = amount_per_unit;
        self
    }
}

/// 配方集合（配方編輯器的資料模型）
///
/// 維持「每個物料至多一個配方項」的不變量：重複插入在此層被拒絕，
/// 計算引擎不再重複驗證。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    components: Vec<RecipeComponent>,
}

impl Recipe {
    /// 創建空配方
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加配方項
    ///
    /// 同一物料重複添加時拒絕。
    pub fn add(&mut self, component: RecipeComponent) -> Result<()> {
        if self
            .components
            .iter()
            .any(|c| c.material_id == component.material_id)
        {
            return Err(PlanError::DuplicateRecipeComponent(component.material_id));
        }
        self.components.push(component);
        Ok(())
    }

    /// 依配方項ID刪除
    pub fn remove(&mut self, id: Uuid) -> Result<RecipeComponent> {
        let index = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or(PlanError::RecipeComponentNotFound(id))?;
        Ok(self.components.remove(index))
    }

    /// 依物料ID查找配方項
    pub fn find_by_material(&self, material_id: Uuid) -> Option<&RecipeComponent> {
        self.components.iter().find(|c| c.material_id == material_id)
    }

    /// 配方項切片（供引擎讀取）
    pub fn components(&self) -> &[RecipeComponent] {
        &self.components
    }

    /// 配方項數量
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
