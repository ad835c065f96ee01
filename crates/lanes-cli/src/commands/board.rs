use anyhow::bail;
use lanes_board::CreateBoard;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BoardCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lanes board`.
pub async fn handle(
    action: &BoardCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BoardCommands::List => output(&ctx.registry.list(), flags.format),
        BoardCommands::Create { name, seed } => {
            let seed = *seed || ctx.config.general.seed_new_boards;
            let board = ctx.registry.create(name, CreateBoard { seed }).await?;
            if flags.quiet {
                return Ok(());
            }
            output(&board, flags.format)
        }
        BoardCommands::Delete { id } => {
            ctx.board(id)?;
            if !ctx.registry.delete(id).await {
                bail!("cannot delete '{id}': a workspace keeps at least one board");
            }
            if flags.quiet {
                return Ok(());
            }
            output(&json!({ "deleted": id }), flags.format)
        }
        BoardCommands::Reset => {
            let boards = ctx.registry.reset().await.to_vec();
            if flags.quiet {
                return Ok(());
            }
            output(&boards, flags.format)
        }
    }
}
