//! 原料庫存模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PlanError, Result};

/// 原料庫存行
///
/// `quantity` 以 `unit` 計量，`cost_per_unit` 為每一單位數量的貨幣成本。
/// `unit` 僅供顯示，引擎不做單位換算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 物料ID（集合內唯一）
    pub id: Uuid,

    /// 物料名稱
    pub name: String,

    /// 可用數量
    pub quantity: f64,

    /// 計量單位（顯示用）
    pub unit: String,

    /// 單位成本
    pub cost_per_unit: f64,
}

impl Material {
    /// 創建新的原料行
    pub fn new(name: String, quantity: f64, unit: String, cost_per_unit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            quantity,
            unit,
            cost_per_unit,
        }
    }

    /// 建構器模式：設置數量
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// 建構器模式：設置單位成本
    pub fn with_cost_per_unit(mut self, cost_per_unit: f64) -> Self {
        self.cost_per_unit = cost_per_unit;
        self
    }

    /// 庫存總值（數量 × 單位成本）
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.cost_per_unit
    }
}

/// 原料庫存集合（庫存編輯器的資料模型）
///
/// 維持 `Material.id` 在集合內唯一。刪除被配方引用的物料是允許的，
/// 配方中的引用因此可能懸空，由計算引擎的查找回退邏輯處理。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    materials: Vec<Material>,
}

impl Inventory {
    /// 創建空庫存
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加原料行
    ///
    /// 名稱為空白時拒絕（編輯器層驗證）。
    pub fn add(&mut self, material: Material) -> Result<()> {
        if material.name.trim().is_empty() {
            return Err(PlanError::BlankField("name"));
        }
        self.materials.push(material);
        Ok(())
    }

    /// 依ID查找原料（顯式查找，找不到回傳 None）
    pub fn find(&self, id: Uuid) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// 更新原料行（依ID覆蓋）
    pub fn update(&mut self, material: Material) -> Result<()> {
        let slot = self
            .materials
            .iter_mut()
            .find(|m| m.id == material.id)
            .ok_or(PlanError::MaterialNotFound(material.id))?;
        *slot = material;
        Ok(())
    }

    /// 刪除原料行
    pub fn remove(&mut self, id: Uuid) -> Result<Material> {
        let index = self
            .materials
            .iter()
            .position(|m| m.id == id)
            .ok_or(PlanError::MaterialNotFound(id))?;
        Ok(self.materials.remove(index))
    }

    /// 原料切片（供引擎讀取）
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// 原料數量
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
