//! # CosmoCost Store
//!
//! 本地儲存：目錄與配方的 JSON 快照。
//! 核心計算不碰儲存；呼叫端載入一次快照、傳入計算、編輯後存回

pub mod state;
pub mod store;

pub use state::AppState;
pub use store::{JsonStore, StoreError};
