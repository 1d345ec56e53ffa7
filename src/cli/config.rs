//! Configuration display CLI command

use crate::context::AppContext;
use crate::error::TabunganResult;

/// Handle the config command
pub fn handle_config_command(ctx: &AppContext) -> TabunganResult<()> {
    println!("Konfigurasi tabungan-cli");
    println!("========================");
    println!("Direktori basis:  {}", ctx.paths.base_dir().display());
    println!("Direktori data:   {}", ctx.paths.data_dir().display());
    println!("Direktori backup: {}", ctx.paths.backup_dir().display());
    println!();
    println!("Pengaturan:");
    println!("  Jumlah minimal: {}", ctx.settings.min_amount);
    println!("  Gaya grafik:    {}", ctx.settings.default_chart_style);
    println!("  Versi skema:    {}", ctx.settings.schema_version);
    Ok(())
}
