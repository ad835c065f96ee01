use anyhow::bail;
use lanes_core::entities::{ColumnId, Task};
use lanes_core::enums::Priority;
use lanes_core::input::{format_due_date, format_labels};
use lanes_core::mutation::TaskDraft;
use serde::Serialize;
use serde_json::json;

use crate::cli::subcommands::{TaskCommands, TaskFields};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{check_due_date, parse_column, parse_priority};
use crate::context::AppContext;
use crate::output::output;

/// One line of `lanes task list --format table`.
#[derive(Debug, Serialize)]
struct TaskRow<'a> {
    id: &'a str,
    column: &'a ColumnId,
    order: u32,
    title: &'a str,
    priority: Priority,
    due: String,
    labels: String,
}

impl<'a> From<&'a Task> for TaskRow<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: &task.id,
            column: &task.column_id,
            order: task.order,
            title: &task.title,
            priority: task.priority,
            due: format_due_date(task.due_date.as_ref()),
            labels: format_labels(&task.labels),
        }
    }
}

/// Handle `lanes task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List { board, column } => list(ctx, board, column.as_deref(), flags).await,
        TaskCommands::Add { board, fields } => {
            let mut draft = TaskDraft::default();
            apply_fields(&mut draft, fields)?;
            let session = ctx.session(board).await?;
            let task = session.add_task(&draft).await?;
            session.flush().await;
            print_task(&task, flags)
        }
        TaskCommands::Edit { id, board, fields } => {
            let session = ctx.session(board).await?;
            let Some(current) = session.tasks().await.into_iter().find(|t| &t.id == id) else {
                bail!("no task with id '{id}' on board '{board}'");
            };
            let mut draft = TaskDraft::from_task(&current);
            apply_fields(&mut draft, fields)?;
            let task = session.edit_task(id, &draft).await?;
            session.flush().await;
            print_task(&task, flags)
        }
        TaskCommands::Delete { id, board } => {
            let session = ctx.session(board).await?;
            session.delete_task(id).await?;
            session.flush().await;
            if flags.quiet {
                return Ok(());
            }
            output(&json!({ "deleted": id }), flags.format)
        }
        TaskCommands::Move {
            id,
            board,
            to,
            index,
        } => {
            let to = parse_column(to)?;
            let session = ctx.session(board).await?;
            let task = session.move_task(id, &to, *index).await?;
            session.flush().await;
            print_task(&task, flags)
        }
    }
}

async fn list(
    ctx: &AppContext,
    board_id: &str,
    column: Option<&str>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let board = ctx.board(board_id)?.clone();
    let column = column.map(parse_column).transpose()?;
    let session = ctx.session(board_id).await?;
    let snapshot = session.snapshot(&board).await;
    session.flush().await;

    let tasks: Vec<Task> = snapshot
        .columns
        .into_iter()
        .filter(|c| column.as_ref().is_none_or(|wanted| &c.column_id == wanted))
        .flat_map(|c| c.tasks)
        .collect();

    match flags.format {
        OutputFormat::Table => {
            let rows: Vec<TaskRow<'_>> = tasks.iter().map(TaskRow::from).collect();
            output(&rows, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&tasks, flags.format),
    }
}

fn apply_fields(draft: &mut TaskDraft, fields: &TaskFields) -> anyhow::Result<()> {
    if let Some(title) = &fields.title {
        draft.title.clone_from(title);
    }
    if let Some(description) = &fields.description {
        draft.description.clone_from(description);
    }
    if let Some(column) = &fields.column {
        draft.column_id = parse_column(column)?;
    }
    if let Some(priority) = &fields.priority {
        draft.priority = parse_priority(priority)?;
    }
    if let Some(due) = &fields.due {
        check_due_date(due)?;
        draft.due_date.clone_from(due);
    }
    if let Some(labels) = &fields.labels {
        draft.labels.clone_from(labels);
    }
    Ok(())
}

fn print_task(task: &Task, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.quiet {
        return Ok(());
    }
    match flags.format {
        OutputFormat::Table => output(&TaskRow::from(task), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(task, flags.format),
    }
}
