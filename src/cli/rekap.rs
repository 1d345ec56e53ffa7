//! Recap CLI command

use crate::context::AppContext;
use crate::error::TabunganResult;
use crate::reports::RekapReport;

use super::FilterArgs;

/// Handle the recap command
pub fn handle_rekap_command(ctx: &AppContext, filter: FilterArgs) -> TabunganResult<()> {
    let state = filter.resolve(ctx.today())?;
    let report = RekapReport::generate(&ctx.store, state);
    print!("{}", report.format_terminal());
    Ok(())
}
