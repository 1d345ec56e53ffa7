//! Data reset CLI command

use crate::context::AppContext;
use crate::display::notice;
use crate::error::TabunganResult;

/// Handle the reset command
pub fn handle_reset_command(ctx: &mut AppContext, force: bool) -> TabunganResult<()> {
    let savings_count = ctx.store.savings().len();
    let expense_count = ctx.store.expenses().len();

    if !force {
        println!(
            "PERINGATAN: {} tabungan dan {} pengeluaran akan dihapus!",
            savings_count, expense_count
        );
        println!("Untuk melanjutkan, jalankan lagi dengan --force:");
        println!("  tabungan reset --force");
        return Ok(());
    }

    ctx.records().reset()?;
    notice::success("Semua data telah direset");

    Ok(())
}
