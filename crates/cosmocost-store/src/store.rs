//! JSON 檔案儲存

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::state::AppState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CosmoCost";
const APP_NAME: &str = "CosmoCost";
const STATE_FILE: &str = "state.json";

/// 儲存錯誤
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("找不到可用的儲存目錄")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// JSON 快照儲存
///
/// 單一本地檔案，不保證多程序併發下的耐久性
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// 使用指定路徑（測試與匯出用）
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用預設的使用者資料位置
    pub fn default_location() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .ok_or(StoreError::StorageUnavailable)?;
        Ok(Self {
            path: dirs.data_dir().join(STATE_FILE),
        })
    }

    /// 儲存檔案路徑
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 載入狀態
    ///
    /// 檔案不存在或無法解析時退回預設狀態，不讓壞檔案
    /// 擋住整個應用
    pub fn load(&self) -> AppState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("儲存檔案不存在，使用預設狀態: {}", self.path.display());
                return AppState::new();
            }
            Err(err) => {
                tracing::warn!("讀取儲存檔案失敗，使用預設狀態: {}", err);
                return AppState::new();
            }
        };

        match AppState::from_json(&raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("儲存檔案解析失敗，使用預設狀態: {}", err);
                AppState::new()
            }
        }
    }

    /// 儲存狀態（整份覆寫）
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = state.to_json_pretty()?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
