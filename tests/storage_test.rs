use anyhow::Result;
use astro_profile::core::Storage;
use astro_profile::{export_profile, profile_from_birth, AstroProfile, BirthInput, KeyStore, LocalStorage};
use tempfile::TempDir;

fn sample_profile() -> AstroProfile {
    profile_from_birth(&BirthInput {
        name: "Ada Lovelace".to_string(),
        date: "1815-12-10".to_string(),
        time: "09:00".to_string(),
        place: "London".to_string(),
        tz_offset: "+00:00".to_string(),
    })
    .unwrap()
}

/// 匯出的 JSON 可以讀回相同的 profile
#[tokio::test]
async fn test_export_profile_to_local_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("nested").to_str().unwrap().to_string();
    let storage = LocalStorage::new(data_dir.clone());

    let profile = sample_profile();
    let file_name = export_profile(&storage, &profile).await?;
    assert_eq!(file_name, "ada-lovelace-profile.json");

    let full_path = std::path::Path::new(&data_dir).join(&file_name);
    assert!(full_path.exists());

    let bytes = storage.read_file(&file_name).await?;
    let restored: AstroProfile = serde_json::from_slice(&bytes)?;
    assert_eq!(restored, profile);

    let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(raw["sunSign"], "Sagittarius");
    assert_eq!(raw["chineseAnimal"], "Pig");
    Ok(())
}

#[tokio::test]
async fn test_key_store_round_trip_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let store = KeyStore::new(storage.clone());

    assert_eq!(store.load().await?, None);

    store.save("sk-live-123").await?;
    assert_eq!(store.load().await?.as_deref(), Some("sk-live-123"));
    assert!(storage.full_path("api_key").exists());

    store.clear().await?;
    assert_eq!(store.load().await?, None);

    // 清除不存在的 key 不應失敗
    store.clear().await?;
    Ok(())
}
