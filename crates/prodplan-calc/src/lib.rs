//! # Prodplan Calculation Engine
//!
//! 核心生產指標計算引擎
//!
//! 引擎是純函數：`(原料, 配方, 產品參數) → 指標報告`，同步、無狀態、
//! 不做 I/O，對任何型別正確的輸入都不會失敗。退化輸入（空配方、零數量、
//! 零用量、懸空引用）一律映射到定義好的數值結果，因此可在每次編輯後
//! 直接重算，不需防禦性包裝。

pub mod calculator;
pub mod capacity;
pub mod costing;
pub mod utilization;

// Re-export 主要類型
pub use calculator::MetricsCalculator;
pub use capacity::CapacityResult;
pub use costing::CostingResult;
