use anyhow::Result;

use prompterm_core::{AppConfig, Settings, Store};

pub async fn run(config: AppConfig) -> Result<()> {
    let store = Store::new(config.data_dir());
    store.save_settings(&Settings::default()).await?;
    println!(
        "Settings reset to defaults ({})",
        store.settings_path().display()
    );
    Ok(())
}
