//! 生產指標主計算器

use prodplan_core::{Material, ProductSettings, ProductionMetrics, RecipeComponent};

use crate::capacity::CapacityCalculator;
use crate::costing::CostingCalculator;
use crate::utilization::UtilizationCalculator;

/// 生產指標計算器
///
/// 單一決定性轉換：相同輸入必得到逐位相同的報告。引擎只借用輸入的
/// 唯讀視圖，回傳的報告是全新配置的值，與輸入之間沒有共享。
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// 主計算入口
    pub fn compute(
        materials: &[Material],
        recipe: &[RecipeComponent],
        settings: &ProductSettings,
    ) -> ProductionMetrics {
        tracing::info!(
            materials = materials.len(),
            recipe_components = recipe.len(),
            product = %settings.name,
            "開始生產指標計算"
        );

        // Step 1-2: 各配方項產量限制 → 最大產量與瓶頸
        let capacity = CapacityCalculator::calculate(materials, recipe);

        // Step 3-5: 成本分層、損益與平衡點
        let costing =
            CostingCalculator::calculate(materials, recipe, settings, capacity.max_production);

        // Step 6: 逐原料利用率
        let material_utilization =
            UtilizationCalculator::calculate(materials, recipe, capacity.max_production);

        let metrics = ProductionMetrics {
            max_production: capacity.max_production,
            total_raw_cost: costing.total_raw_cost,
            total_cost: costing.total_cost,
            cost_per_unit: costing.cost_per_unit,
            bottleneck_material: capacity.bottleneck_material,
            revenue: costing.revenue,
            profit: costing.profit,
            profit_margin: costing.profit_margin,
            break_even_units: costing.break_even_units,
            material_utilization,
        };

        tracing::info!(
            max_production = metrics.max_production,
            profit = metrics.profit,
            "生產指標計算完成"
        );

        metrics
    }
}
