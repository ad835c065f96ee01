use chrono::{DateTime, Utc};
use lanes_core::snapshot::{BoardSnapshot, WorkspaceSummary};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardStats {
    id: String,
    name: String,
    total: usize,
    todo: usize,
    in_progress: usize,
    done: usize,
    last_updated_at: Option<DateTime<Utc>>,
    upcoming_due_date: Option<DateTime<Utc>>,
}

impl From<BoardSnapshot> for BoardStats {
    fn from(snapshot: BoardSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            total: snapshot.total,
            todo: snapshot.todo,
            in_progress: snapshot.in_progress,
            done: snapshot.done,
            last_updated_at: snapshot.last_updated_at,
            upcoming_due_date: snapshot.upcoming_due_date,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    boards: Vec<BoardStats>,
    summary: WorkspaceSummary,
}

/// Handle `lanes stats`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut snapshots = Vec::with_capacity(ctx.registry.list().len());
    for board in ctx.registry.list() {
        let session = ctx.session(&board.id).await?;
        snapshots.push(session.snapshot(board).await);
        session.flush().await;
    }

    let response = StatsResponse {
        summary: WorkspaceSummary::from_snapshots(&snapshots),
        boards: snapshots.into_iter().map(BoardStats::from).collect(),
    };

    match flags.format {
        OutputFormat::Table => {
            output(&response.boards, flags.format)?;
            println!();
            output(&response.summary, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}
