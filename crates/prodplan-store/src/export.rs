//! 平面文字匯出

use prodplan_core::{Material, ProductSettings, RecipeComponent};

/// 將輸入三元組匯出為逐行文字
///
/// 格式：每一原料一行 `Material,<名稱>,<數量>,<單位>,<單位成本>`，
/// 每一配方項一行 `Recipe,<物料名稱|Unknown>,<用量>`，最後一行
/// `Product,<產品名稱>,<售價>`。無標頭列；欄位內嵌的分隔符不做跳脫，
/// 是既定的格式限制而非待修的缺陷。
pub fn flat_text(
    materials: &[Material],
    recipe: &[RecipeComponent],
    product_settings: &ProductSettings,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(materials.len() + recipe.len() + 1);

    for material in materials {
        lines.push(format!(
            "Material,{},{},{},{}",
            material.name, material.quantity, material.unit, material.cost_per_unit
        ));
    }

    for component in recipe {
        let material_name = materials
            .iter()
            .find(|m| m.id == component.material_id)
            .map_or("Unknown", |m| m.name.as_str());
        lines.push(format!(
            "Recipe,{},{}",
            material_name, component.amount_per_unit
        ));
    }

    lines.push(format!(
        "Product,{},{}",
        product_settings.name, product_settings.selling_price
    ));

    lines.join("\n")
}
