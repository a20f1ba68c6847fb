//! 生產指標報告模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 損益平衡結果
///
/// 邊際貢獻（售價 − 單位原料成本）不為正時永遠無法回收固定成本，
/// 以獨立的 `Never` 變體表示，不以大數值冒充。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BreakEven {
    /// 達到損益平衡所需的最小產量
    Units(u64),
    /// 永遠無法達到損益平衡
    Never,
}

impl BreakEven {
    /// 檢查是否可達到損益平衡
    pub fn is_reachable(&self) -> bool {
        matches!(self, BreakEven::Units(_))
    }

    /// 取得所需產量（無法達到時回傳 None）
    pub fn units(&self) -> Option<u64> {
        match self {
            BreakEven::Units(units) => Some(*units),
            BreakEven::Never => None,
        }
    }
}

/// 單一原料的利用率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUtilization {
    /// 物料ID
    pub material_id: Uuid,

    /// 物料名稱
    pub material_name: String,

    /// 最大產量下的消耗量
    pub used: f64,

    /// 可用數量
    pub available: f64,

    /// 利用率（%）
    ///
    /// 可用數量為 0 時：有消耗視為 `+∞`%，無消耗視為 0%。
    pub utilization_percentage: f64,
}

/// 生產指標報告
///
/// 引擎每次呼叫回傳的全新衍生值，產生後不再變動。
///
/// `max_production` 為 `f64`：配方為空時各項限制的最小值取空集，
/// 依定義為 `+∞`，呼叫端（報表層）須自行防範空配方。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionMetrics {
    /// 最大可生產單位數（整數值，空配方時為 +∞）
    pub max_production: f64,

    /// 原料總成本（單位原料成本 × 最大產量）
    pub total_raw_cost: f64,

    /// 總成本（原料總成本 + 固定成本）
    pub total_cost: f64,

    /// 單位成本（最大產量為 0 時定義為 0）
    pub cost_per_unit: f64,

    /// 瓶頸物料名稱（空配方或引用懸空時為 None）
    pub bottleneck_material: Option<String>,

    /// 收入（售價 × 最大產量）
    pub revenue: f64,

    /// 利潤（收入 − 總成本）
    pub profit: f64,

    /// 利潤率（%，收入為 0 時定義為 0）
    pub profit_margin: f64,

    /// 損益平衡產量
    pub break_even_units: BreakEven,

    /// 每一原料的利用率（依輸入順序，包含未用於配方的原料）
    pub material_utilization: Vec<MaterialUtilization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_even_units() {
        let reachable = BreakEven::Units(120);
        assert!(reachable.is_reachable());
        assert_eq!(reachable.units(), Some(120));

        let never = BreakEven::Never;
        assert!(!never.is_reachable());
        assert_eq!(never.units(), None);
    }

    #[test]
    fn test_break_even_serde_distinguishable() {
        // Never 與任何有限數值在序列化後必須可區分
        let units = serde_json::to_string(&BreakEven::Units(0)).unwrap();
        let never = serde_json::to_string(&BreakEven::Never).unwrap();
        assert_ne!(units, never);

        let parsed: BreakEven = serde_json::from_str(&never).unwrap();
        assert_eq!(parsed, BreakEven::Never);
    }
}
