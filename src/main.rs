use astro_profile::config::{Command, CliConfig};
use astro_profile::core::ConfigProvider;
use astro_profile::utils::error::{ErrorSeverity, Result};
use astro_profile::utils::{logger, validation, validation::Validate};
use astro_profile::{
    daily_message, export_profile, profile_from_birth, AppConfig, AstroProfile, BirthInput,
    ChatClient, KeyStore, LocalStorage, OracleEngine,
};
use clap::Parser;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };

    let config = config.with_data_dir(cli.data_dir.clone());
    config.validate()?;
    Ok(config)
}

fn build_profile(input: BirthInput) -> Result<AstroProfile> {
    input.validate()?;
    profile_from_birth(&input)
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = load_config(&cli)?;
    let storage = LocalStorage::new(config.data_dir().to_string());
    let json = cli.json;

    match cli.command {
        Command::Profile { birth, export } => {
            let profile = build_profile(birth.into())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }

            if export {
                let file_name = export_profile(&storage, &profile).await?;
                if !json {
                    println!("📁 Saved to {}", storage.full_path(&file_name).display());
                }
            }
        }
        Command::Daily { name, date } => {
            validation::validate_non_empty_string("name", &name)?;
            let date = match date {
                Some(date) => {
                    validation::validate_birth_date("date", &date)?;
                    date
                }
                None => chrono::Local::now().format("%Y-%m-%d").to_string(),
            };

            let message = daily_message(&name, &date);
            if json {
                let value = serde_json::json!({ "name": name, "date": date, "message": message });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("✨ {} ({}): {}", name, date, message);
            }
        }
        Command::Ask {
            birth,
            offline,
            question,
        } => {
            let profile = build_profile(birth.into())?;
            let engine = build_oracle(&config, &storage, offline).await?;
            if !engine.is_online() {
                tracing::info!("Using rule-based answers");
            }

            let answer = engine.ask(&question, &profile).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                println!("{}", answer.text);
            }
        }
        Command::SetKey { key } => {
            KeyStore::new(storage).save(&key).await?;
            if !json {
                println!("🔑 API key saved");
            }
        }
        Command::ClearKey => {
            KeyStore::new(storage).clear().await?;
            if !json {
                println!("🔑 API key cleared");
            }
        }
    }

    Ok(())
}

async fn build_oracle(
    config: &AppConfig,
    storage: &LocalStorage,
    offline: bool,
) -> Result<OracleEngine<ChatClient>> {
    if offline || !config.llm_enabled() {
        return Ok(OracleEngine::offline());
    }

    let api_key = match config.configured_api_key() {
        Some(key) => Some(key),
        None => KeyStore::new(storage.clone()).load().await?,
    };

    match api_key {
        Some(key) => Ok(OracleEngine::new(ChatClient::new(config, key)?)),
        None => {
            tracing::info!("No API key configured");
            Ok(OracleEngine::offline())
        }
    }
}

fn print_profile(profile: &AstroProfile) {
    println!("🌞 {} ({} / {})", profile.sun_sign, profile.element, profile.modality);
    println!("🔢 Life Path: {}", profile.life_path);
    println!("🐉 Chinese zodiac: {}", profile.chinese_animal);
    println!(
        "🍀 Lucky color: {}  Lucky number: {}",
        profile.lucky_color, profile.lucky_number
    );
    println!();
    println!("{}", profile.summary);
}

