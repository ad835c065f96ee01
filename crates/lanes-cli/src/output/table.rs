//! Plain-text aligned tables.

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Shrink the widest columns until a line fits.
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, padding each column to its widest cell.
///
/// Numbers are right-aligned. Cells that do not fit are cut with `…`.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = clip(row.get(col).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color { paint(&cell, padded) } else { padded }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let total = |widths: &[usize]| {
        widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1)
    };
    while total(widths) > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(col, width)| **width > headers[*col].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(col, _)| col);
        let Some(col) = widest else {
            break;
        };
        widths[col] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Wrap a padded cell in an ANSI color chosen by its content.
fn paint(cell: &str, padded: String) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "done" | "low" => "32",
        "inprogress" | "medium" => "33",
        "high" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_rows() {
        let rows = vec![
            vec!["tsk-1".to_string(), "Todo".to_string(), "0".to_string()],
            vec!["tsk-200".to_string(), "InProgress".to_string(), "12".to_string()],
        ];
        let table = render_entity_table(&["id", "column", "order"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("Todo"), lines[3].find("InProgress"));
        assert!(lines[2].ends_with("    0"));
    }

    #[test]
    fn wide_cells_are_clipped_to_max_width() {
        let rows = vec![vec!["x".repeat(80), "short".to_string()]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_entity_table(&["title", "id"], &rows, options);
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn color_marks_priorities() {
        let rows = vec![vec!["high".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_entity_table(&["priority"], &rows, options);
        assert!(table.contains("\u{1b}[31mhigh"));
    }
}
