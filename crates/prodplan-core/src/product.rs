//! 產品商業參數模型

use serde::{Deserialize, Serialize};

/// 整批生產的商業參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSettings {
    /// 產品名稱
    pub name: String,

    /// 每單位售價
    pub selling_price: f64,

    /// 一次性固定成本（與產量無關）
    pub fixed_cost: f64,
}

impl ProductSettings {
    /// 創建新的產品參數
    pub fn new(name: String, selling_price: f64) -> Self {
        Self {
            name,
            selling_price,
            fixed_cost: 0.0,
        }
    }

    /// 建構器模式：設置固定成本
    pub fn with_fixed_cost(mut self, fixed_cost: f64) -> Self {
        self.fixed_cost = fixed_cost;
        self
    }
}
