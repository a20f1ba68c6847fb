//! # Prodplan
//!
//! 生產批次規劃引擎：給定原料庫存、配方與商業參數，計算最大產量、
//! 瓶頸物料與成本/收入/利潤/損益平衡全貌。
//!
//! 本 crate 是工作區的統一入口，重新匯出各子 crate 的主要類型。

pub use prodplan_calc::MetricsCalculator;
pub use prodplan_core::{
    BreakEven, Inventory, Material, MaterialUtilization, PlanError, ProductSettings,
    ProductionMetrics, Recipe, RecipeComponent, Result,
};
pub use prodplan_store::{
    export, JsonFileStore, MemoryStore, SavedScenario, ScenarioStore, ScenarioSummary,
};
