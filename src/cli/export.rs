//! Excel export CLI command

use std::path::PathBuf;

use crate::context::AppContext;
use crate::display::notice;
use crate::error::TabunganResult;
use crate::export::{default_export_filename, write_xlsx};

/// Handle the export command
pub fn handle_export_command(ctx: &AppContext, output: Option<String>) -> TabunganResult<()> {
    let path = match output {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(default_export_filename(ctx.today())),
    };

    write_xlsx(&path, ctx.store.savings(), ctx.store.expenses())?;

    notice::success("Data berhasil diekspor ke Excel");
    println!("  File: {}", path.display());
    println!(
        "  Baris: {} tabungan, {} pengeluaran",
        ctx.store.savings().len(),
        ctx.store.expenses().len()
    );

    Ok(())
}
