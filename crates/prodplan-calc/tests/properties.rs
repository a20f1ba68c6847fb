//! 引擎代數性質測試

use prodplan_calc::MetricsCalculator;
use prodplan_core::{BreakEven, Material, ProductSettings, RecipeComponent};
use proptest::prelude::*;

/// 產生 1..=5 組（原料, 配方項）配對，數量與用量皆為正且有限
fn matched_inputs() -> impl Strategy<Value = (Vec<Material>, Vec<RecipeComponent>)> {
    prop::collection::vec((1.0f64..1e6, 0.01f64..1e3, 0.01f64..1e3), 1..=5).prop_map(|rows| {
        let mut materials = Vec::new();
        let mut recipe = Vec::new();
        for (index, (quantity, amount, cost)) in rows.into_iter().enumerate() {
            let material = Material::new(format!("M{index}"), quantity, "kg".to_string(), cost);
            recipe.push(RecipeComponent::new(material.id, amount));
            materials.push(material);
        }
        (materials, recipe)
    })
}

proptest! {
    /// max_production = floor(min(quantity_i / amount_i))
    #[test]
    fn max_production_is_floor_of_min_limit(
        (materials, recipe) in matched_inputs(),
        price in 0.0f64..1e4,
        fixed in 0.0f64..1e6,
    ) {
        let settings = ProductSettings::new("P".to_string(), price).with_fixed_cost(fixed);
        let metrics = MetricsCalculator::compute(&materials, &recipe, &settings);

        let expected = recipe
            .iter()
            .map(|c| {
                let m = materials.iter().find(|m| m.id == c.material_id).unwrap();
                m.quantity / c.amount_per_unit
            })
            .fold(f64::INFINITY, f64::min)
            .floor();

        prop_assert_eq!(metrics.max_production, expected);
    }

    /// total_cost = total_raw_cost + fixed_cost 對任何輸入恆成立
    #[test]
    fn total_cost_layers_fixed_cost(
        (materials, recipe) in matched_inputs(),
        price in 0.0f64..1e4,
        fixed in 0.0f64..1e6,
    ) {
        let settings = ProductSettings::new("P".to_string(), price).with_fixed_cost(fixed);
        let metrics = MetricsCalculator::compute(&materials, &recipe, &settings);

        prop_assert_eq!(metrics.total_cost, metrics.total_raw_cost + fixed);
    }

    /// 最大產量為 0 時單位成本定義為 0
    #[test]
    fn zero_production_has_zero_cost_per_unit(
        amount in 1.0f64..1e3,
        price in 0.0f64..1e4,
        fixed in 0.0f64..1e6,
    ) {
        let material = Material::new("Empty".to_string(), 0.0, "kg".to_string(), 1.0);
        let recipe = vec![RecipeComponent::new(material.id, amount)];
        let materials = vec![material];
        let settings = ProductSettings::new("P".to_string(), price).with_fixed_cost(fixed);

        let metrics = MetricsCalculator::compute(&materials, &recipe, &settings);

        prop_assert_eq!(metrics.max_production, 0.0);
        prop_assert_eq!(metrics.cost_per_unit, 0.0);
    }

    /// 售價不高於單位原料成本時，平衡點必為 Never，與固定成本無關
    #[test]
    fn break_even_never_when_no_contribution(
        (materials, recipe) in matched_inputs(),
        fixed in 0.0f64..1e6,
        discount in 0.0f64..1.0,
    ) {
        let raw_cost_per_unit: f64 = recipe
            .iter()
            .map(|c| {
                let m = materials.iter().find(|m| m.id == c.material_id).unwrap();
                m.cost_per_unit * c.amount_per_unit
            })
            .sum();

        let settings = ProductSettings::new("P".to_string(), raw_cost_per_unit * discount)
            .with_fixed_cost(fixed);
        let metrics = MetricsCalculator::compute(&materials, &recipe, &settings);

        prop_assert_eq!(metrics.break_even_units, BreakEven::Never);
    }

    /// 懸空引用強制最大產量為 0
    #[test]
    fn dangling_reference_blocks_production(
        (materials, mut recipe) in matched_inputs(),
        amount in 0.01f64..1e3,
    ) {
        recipe.push(RecipeComponent::new(uuid::Uuid::new_v4(), amount));
        let settings = ProductSettings::new("P".to_string(), 10.0);

        let metrics = MetricsCalculator::compute(&materials, &recipe, &settings);

        prop_assert_eq!(metrics.max_production, 0.0);
    }

    /// 相同輸入重複計算結果完全一致（無隱藏狀態）
    #[test]
    fn compute_is_deterministic(
        (materials, recipe) in matched_inputs(),
        price in 0.0f64..1e4,
        fixed in 0.0f64..1e6,
    ) {
        let settings = ProductSettings::new("P".to_string(), price).with_fixed_cost(fixed);

        let first = MetricsCalculator::compute(&materials, &recipe, &settings);
        let second = MetricsCalculator::compute(&materials, &recipe, &settings);

        prop_assert_eq!(first, second);
    }
}
