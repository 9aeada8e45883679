use anyhow::Result;
use markdays_core::config::MarkdaysConfig;
use owo_colors::OwoColorize;

pub fn run(config: &MarkdaysConfig) -> Result<()> {
    let config_path = MarkdaysConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    println!("  Store:   {}", config.store_path().display());

    println!("{}", "Time".bold());
    println!(
        "  Timezone:  {}",
        config.timezone.as_deref().unwrap_or("local")
    );
    println!("  Today:     {}", config.today()?);

    Ok(())
}
