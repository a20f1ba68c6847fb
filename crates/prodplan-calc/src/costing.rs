//! 成本、損益與平衡點計算

use prodplan_core::{BreakEven, Material, ProductSettings, RecipeComponent};

/// 成本計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct CostingResult {
    /// 單位原料成本（Σ 單位成本 × 用量）
    pub raw_cost_per_unit: f64,

    /// 原料總成本
    pub total_raw_cost: f64,

    /// 總成本（原料總成本 + 固定成本）
    pub total_cost: f64,

    /// 單位成本（最大產量為 0 時定義為 0）
    pub cost_per_unit: f64,

    /// 收入
    pub revenue: f64,

    /// 利潤
    pub profit: f64,

    /// 利潤率（%，收入為 0 時定義為 0）
    pub profit_margin: f64,

    /// 損益平衡產量
    pub break_even_units: BreakEven,
}

/// 成本計算器
pub struct CostingCalculator;

impl CostingCalculator {
    /// 計算成本、損益與平衡點
    ///
    /// 引用懸空的配方項對單位原料成本貢獻 0。損益平衡：邊際貢獻
    /// （售價 − 單位原料成本）為正時取 `ceil(固定成本 / 邊際貢獻)`
    /// 並下限為 0，否則為 `BreakEven::Never`。
    pub fn calculate(
        materials: &[Material],
        recipe: &[RecipeComponent],
        settings: &ProductSettings,
        max_production: f64,
    ) -> CostingResult {
        let raw_cost_per_unit: f64 = recipe
            .iter()
            .filter_map(|component| {
                materials
                    .iter()
                    .find(|m| m.id == component.material_id)
                    .map(|m| m.cost_per_unit * component.amount_per_unit)
            })
            .sum();

        let total_raw_cost = raw_cost_per_unit * max_production;
        let total_cost = total_raw_cost + settings.fixed_cost;

        let cost_per_unit = if max_production > 0.0 {
            total_cost / max_production
        } else {
            0.0
        };

        let revenue = settings.selling_price * max_production;
        let profit = revenue - total_cost;
        let profit_margin = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };

        let contribution_margin = settings.selling_price - raw_cost_per_unit;
        let break_even_units = if contribution_margin > 0.0 {
            BreakEven::Units((settings.fixed_cost / contribution_margin).ceil().max(0.0) as u64)
        } else {
            BreakEven::Never
        };

        tracing::debug!(
            raw_cost_per_unit,
            total_cost,
            profit,
            ?break_even_units,
            "成本計算完成"
        );

        CostingResult {
            raw_cost_per_unit,
            total_raw_cost,
            total_cost,
            cost_per_unit,
            revenue,
            profit,
            profit_margin,
            break_even_units,
        }
    }
}
