//! 產能與瓶頸計算

use prodplan_core::{Material, RecipeComponent};

/// 產能計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityResult {
    /// 最大可生產單位數（floor(min(各配方項限制))，空配方時為 +∞）
    pub max_production: f64,

    /// 瓶頸物料名稱
    pub bottleneck_material: Option<String>,
}

/// 產能計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 計算最大產量與瓶頸物料
    ///
    /// 每個配方項的產量限制：
    /// - 引用的物料不存在 → 0（缺料視為硬阻斷，不是忽略）
    /// - `amount_per_unit == 0` → `+∞`（依 IEEE-754 除法語意，
    ///   `0/0` 的情況同樣取 `+∞`，視為不消耗即不受限）
    /// - 其餘 → `quantity / amount_per_unit`
    ///
    /// 最大產量為所有限制最小值的 floor；空配方對空集取最小值，
    /// 結果為 `+∞`。瓶頸取得最小限制的第一個配方項所屬物料；
    /// 該物料引用懸空時瓶頸為 None。
    pub fn calculate(materials: &[Material], recipe: &[RecipeComponent]) -> CapacityResult {
        let limits: Vec<f64> = recipe
            .iter()
            .map(|component| Self::production_limit(materials, component))
            .collect();

        let min_limit = limits.iter().copied().fold(f64::INFINITY, f64::min);
        let max_production = min_limit.floor();

        // 第一個達到最小限制的配方項決定瓶頸（輸入順序優先）
        let bottleneck_material = limits
            .iter()
            .position(|&limit| limit == min_limit)
            .and_then(|index| {
                let component = &recipe[index];
                materials
                    .iter()
                    .find(|m| m.id == component.material_id)
                    .map(|m| m.name.clone())
            });

        tracing::debug!(max_production, bottleneck = ?bottleneck_material, "產能計算完成");

        CapacityResult {
            max_production,
            bottleneck_material,
        }
    }

    /// 單一配方項的產量限制
    fn production_limit(materials: &[Material], component: &RecipeComponent) -> f64 {
        let Some(material) = materials.iter().find(|m| m.id == component.material_id) else {
            return 0.0;
        };

        if component.amount_per_unit == 0.0 {
            f64::INFINITY
        } else {
            material.quantity / component.amount_per_unit
        }
    }
}
