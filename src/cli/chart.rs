//! Chart CLI command

use crate::config::ChartStyle;
use crate::context::AppContext;
use crate::display::render_chart;
use crate::error::TabunganResult;
use crate::reports::{aggregate, ChartData};

use super::FilterArgs;

/// Handle the chart command
pub fn handle_chart_command(
    ctx: &AppContext,
    filter: FilterArgs,
    gaya: Option<String>,
) -> TabunganResult<()> {
    let state = filter.resolve(ctx.today())?;
    let summary = aggregate(ctx.store.savings(), ctx.store.expenses(), &state);
    let data = ChartData::build(&summary);

    let style = match gaya {
        Some(s) => s.parse::<ChartStyle>()?,
        None => ctx.settings.default_chart_style,
    };

    print!("{}", render_chart(&data, style));
    Ok(())
}
