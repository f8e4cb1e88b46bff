use folio_preview::{CurrentSectionNode, PreviewPhase, TreeOutcome};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::root_commands::TreeArgs;
use crate::context::AppContext;
use crate::output::{output, render_outline};

#[derive(Serialize)]
struct TreeResponse {
    outcome: TreeOutcome,
    phase: PreviewPhase,
    selected_section_id: String,
    tree: Vec<folio_core::TreeItem>,
    current: CurrentSectionNode,
}

/// Handle `folio tree`.
pub async fn handle(args: &TreeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let preview = ctx.preview().await?;
    let outcome = preview
        .load_tree(&args.repository, args.section.as_deref())
        .await?;
    let tree = preview.tree();

    if ctx.flags.format == OutputFormat::Text {
        if outcome == TreeOutcome::NoData {
            println!("no section tree returned for repository {}", args.repository);
            return Ok(());
        }
        print!("{}", render_outline(&tree.meta_tree, &tree.selected_section_id));
        let current = preview.current();
        if current.is_loaded() {
            println!("\n# {}\n{}", current.title, current.content_html);
        }
        return Ok(());
    }

    let response = TreeResponse {
        outcome,
        phase: preview.phase(),
        selected_section_id: tree.selected_section_id,
        tree: tree.meta_tree,
        current: preview.current(),
    };
    output(&response, ctx.flags.format)
}
