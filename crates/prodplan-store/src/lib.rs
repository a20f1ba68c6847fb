//! # Prodplan Store
//!
//! 方案儲存與匯出模組
//!
//! 儲存層是顯式的抽象（`ScenarioStore` trait），由呼叫端持有並傳遞，
//! 不是程序級的全域狀態；測試可用記憶體實作替換檔案實作。

pub mod export;
pub mod json_file;
pub mod memory;
pub mod scenario;
pub mod store;

// Re-export 主要類型
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use scenario::{SavedScenario, ScenarioSummary};
pub use store::ScenarioStore;
