//! 生產批次規劃示例

use prodplan::{
    BreakEven, Inventory, Material, MetricsCalculator, ProductSettings, Recipe, RecipeComponent,
};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    println!("=== 生產批次規劃示例 ===\n");

    // 建立原料庫存
    let mut inventory = Inventory::new();
    let aluminum = Material::new("Aluminum".to_string(), 1000.0, "kg".to_string(), 5.0);
    let plastic = Material::new("Plastic".to_string(), 500.0, "kg".to_string(), 3.0);
    let boards = Material::new("Circuit Boards".to_string(), 200.0, "unit".to_string(), 10.0);
    let (aluminum_id, plastic_id, boards_id) = (aluminum.id, plastic.id, boards.id);
    inventory.add(aluminum)?;
    inventory.add(plastic)?;
    inventory.add(boards)?;

    // 建立配方：每單位產品的原料用量
    let mut recipe = Recipe::new();
    recipe.add(RecipeComponent::new(aluminum_id, 2.0))?;
    recipe.add(RecipeComponent::new(plastic_id, 1.0))?;
    recipe.add(RecipeComponent::new(boards_id, 1.0))?;

    // 商業參數
    let settings = ProductSettings::new("Gadget".to_string(), 50.0).with_fixed_cost(1000.0);

    // 計算生產指標
    let metrics = MetricsCalculator::compute(inventory.materials(), recipe.components(), &settings);

    println!("最大產量: {} 單位", metrics.max_production);
    if let Some(bottleneck) = &metrics.bottleneck_material {
        println!("瓶頸物料: {bottleneck}");
    }
    println!("原料總成本: {:.2}", metrics.total_raw_cost);
    println!("總成本: {:.2}", metrics.total_cost);
    println!("單位成本: {:.2}", metrics.cost_per_unit);
    println!("收入: {:.2}", metrics.revenue);
    println!("利潤: {:.2} ({:.1}%)", metrics.profit, metrics.profit_margin);
    match metrics.break_even_units {
        BreakEven::Units(units) => println!("損益平衡產量: {units} 單位"),
        BreakEven::Never => println!("損益平衡: 無法達到"),
    }

    println!("\n原料利用率:");
    for utilization in &metrics.material_utilization {
        println!(
            "  - {}: 消耗 {:.1} / 可用 {:.1} ({:.1}%)",
            utilization.material_name,
            utilization.used,
            utilization.available,
            utilization.utilization_percentage
        );
    }

    Ok(())
}
