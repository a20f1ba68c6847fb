//! 原料利用率計算

use prodplan_core::{Material, MaterialUtilization, RecipeComponent};

/// 利用率計算器
pub struct UtilizationCalculator;

impl UtilizationCalculator {
    /// 計算每一原料在最大產量下的利用率
    ///
    /// 輸入列表中的每個原料都有一筆結果，包含未用於配方的原料
    /// （消耗為 0）。零用量的配方項視為未消耗。可用數量為 0 時：
    /// 有消耗取 `+∞`%，`0/0` 取 0%。
    pub fn calculate(
        materials: &[Material],
        recipe: &[RecipeComponent],
        max_production: f64,
    ) -> Vec<MaterialUtilization> {
        materials
            .iter()
            .map(|material| {
                let used = recipe
                    .iter()
                    .find(|c| c.material_id == material.id)
                    .filter(|c| c.amount_per_unit != 0.0)
                    .map_or(0.0, |c| c.amount_per_unit * max_production);

                let utilization_percentage = if material.quantity != 0.0 {
                    used / material.quantity * 100.0
                } else if used != 0.0 {
                    f64::INFINITY
                } else {
                    0.0
                };

                MaterialUtilization {
                    material_id: material.id,
                    material_name: material.name.clone(),
                    used,
                    available: material.quantity,
                    utilization_percentage,
                }
            })
            .collect()
    }
}
