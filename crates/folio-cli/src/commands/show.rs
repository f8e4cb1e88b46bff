use folio_preview::{ContentOutcome, CurrentSectionNode};
use serde::Serialize;

use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ShowResponse {
    outcome: ContentOutcome,
    current: CurrentSectionNode,
}

/// Handle `folio show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let preview = ctx.preview().await?;
    let outcome = preview.select_node(&args.section, &args.repository).await?;
    if outcome == ContentOutcome::Empty {
        tracing::warn!(section = %args.section, "backend returned no article");
    }
    output(
        &ShowResponse {
            outcome,
            current: preview.current(),
        },
        ctx.flags.format,
    )
}
