//! 方案儲存與匯出示例

use prodplan::{
    export, JsonFileStore, Material, ProductSettings, RecipeComponent, ScenarioStore,
};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    println!("=== 方案儲存與匯出示例 ===\n");

    let steel = Material::new("Steel".to_string(), 800.0, "kg".to_string(), 8.0);
    let recipe = vec![RecipeComponent::new(steel.id, 4.0)];
    let materials = vec![steel];
    let settings = ProductSettings::new("Bracket".to_string(), 45.0).with_fixed_cost(500.0);

    // 開啟檔案儲存並保存一份快照
    let path = std::env::temp_dir().join("prodplan_scenarios.json");
    let mut store = JsonFileStore::open(&path)?;
    let id = store.save("鋼支架試產", &materials, &recipe, &settings)?;
    println!("已儲存方案 {id}，檔案: {}", store.path().display());

    // 列出所有方案
    println!("\n方案列表:");
    for summary in store.list() {
        println!(
            "  - {} ({}): {} 筆原料, {} 筆配方, 儲存於 {}",
            summary.name,
            summary.id,
            summary.material_count,
            summary.recipe_component_count,
            summary.date.format("%Y-%m-%d %H:%M:%S")
        );
    }

    // 載回快照並匯出為平面文字
    let loaded = store.load(id)?;
    println!("\n匯出內容:");
    println!(
        "{}",
        export::flat_text(&loaded.materials, &loaded.recipe, &loaded.product_settings)
    );

    // 清理示例資料
    store.delete(id)?;

    Ok(())
}
