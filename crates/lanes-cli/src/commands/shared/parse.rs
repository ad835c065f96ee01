use anyhow::bail;
use lanes_core::entities::ColumnId;
use lanes_core::enums::Priority;
use lanes_core::input::parse_due_date;

/// Map user spellings of the default columns onto their ids; anything else
/// is taken as a custom column id.
pub fn parse_column(raw: &str) -> anyhow::Result<ColumnId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("column must not be empty");
    }
    let key = trimmed.to_ascii_lowercase().replace(['-', '_', ' '], "");
    Ok(match key.as_str() {
        "todo" => ColumnId::todo(),
        "inprogress" => ColumnId::in_progress(),
        "done" => ColumnId::done(),
        _ => ColumnId::new(trimmed),
    })
}

pub fn parse_priority(raw: &str) -> anyhow::Result<Priority> {
    raw.parse::<Priority>()
        .map_err(|error| anyhow::anyhow!("invalid priority '{raw}': {error}"))
}

/// Check a `YYYY-MM-DD` value up front; the form layer would silently drop
/// a malformed date. Blank is allowed and means no due date.
pub fn check_due_date(raw: &str) -> anyhow::Result<()> {
    if !raw.trim().is_empty() && parse_due_date(raw).is_none() {
        bail!("invalid due date '{raw}': expected YYYY-MM-DD");
    }
    Ok(())
}
