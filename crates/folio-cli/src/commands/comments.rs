use anyhow::Context;
use folio_core::{Comment, CommentEntityType, FetchOutcome, PageRequest, Paginated};
use serde::Serialize;

use crate::cli::root_commands::CommentsArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CommentsResponse {
    page: PageRequest,
    has_more: bool,
    comments: FetchOutcome<Paginated<Comment>>,
}

/// Handle `folio comments`.
pub async fn handle(args: &CommentsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let entity_type: CommentEntityType = args
        .entity_type
        .parse()
        .context("expected one of: entity, section, repository, article")?;
    let page = PageRequest::new(
        args.page,
        args.size.unwrap_or(ctx.config.general.default_page_size),
    );

    let client = ctx.api_client()?;
    let comments = client
        .get_comment_by_entity_id(entity_type, &args.entity_id, page)
        .await?;
    let has_more = match &comments {
        FetchOutcome::Loaded(found) => found.has_more(page),
        FetchOutcome::Empty => false,
    };
    let response = CommentsResponse {
        page,
        has_more,
        comments,
    };
    output(&response, ctx.flags.format)
}
