/// Cells longer than this are cut and end in `...`.
const MAX_CELL_WIDTH: usize = 48;

/// Print a left-aligned table with an upper-case header row.
pub(crate) fn print_table(header: &[&str], rows: &[Vec<String>]) {
    print!("{}", render_table(header, rows));
}

pub(crate) fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| truncate(c)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let titles: Vec<String> = header.iter().map(|h| h.to_uppercase()).collect();
    push_line(&mut out, &titles, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{cell:<width$}  "));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() > MAX_CELL_WIDTH {
        format!("{}...", cell.chars().take(MAX_CELL_WIDTH).collect::<String>())
    } else {
        cell.to_string()
    }
}
