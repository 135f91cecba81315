use crate::core::{AstroProfile, Storage};
use crate::utils::error::Result;

/// 匯出檔名：名字轉小寫，非英數字元合併為 `-`
pub fn export_file_name(profile: &AstroProfile) -> String {
    let mut slug = String::new();
    for c in profile.name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "profile.json".to_string()
    } else {
        format!("{}-profile.json", slug)
    }
}

/// 將 profile 寫成格式化 JSON，回傳使用的檔名
pub async fn export_profile<S: Storage>(storage: &S, profile: &AstroProfile) -> Result<String> {
    let file_name = export_file_name(profile);
    let json_data = serde_json::to_string_pretty(profile)?;
    storage.write_file(&file_name, json_data.as_bytes()).await?;
    tracing::info!("📁 Profile exported to {}", file_name);
    Ok(file_name)
}
