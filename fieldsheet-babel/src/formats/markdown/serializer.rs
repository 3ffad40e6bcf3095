//! Markdown serialization (field table → pipe table)

use crate::table::FieldTable;

pub fn serialize_to_markdown(table: &FieldTable) -> String {
    let mut output = format!("# {}\n\n", table.title);

    let header: Vec<String> = table.header().iter().map(|h| escape_cell(h)).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells().iter().map(|c| escape_cell(c)).collect())
        .collect();

    // 1. Calculate column widths
    let mut col_widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.chars().count());
        }
    }

    // Ensure minimum width of 3 for the separator dashes
    for width in &mut col_widths {
        *width = (*width).max(3);
    }

    // 2. Header
    push_row(&mut output, &header, &col_widths);

    // 3. Separator
    output.push('|');
    for width in &col_widths {
        output.push_str(&format!(" {} |", "-".repeat(*width)));
    }
    output.push('\n');

    // 4. Body
    for row in &rows {
        push_row(&mut output, row, &col_widths);
    }

    output
}

fn push_row(output: &mut String, cells: &[String], col_widths: &[usize]) {
    output.push('|');
    for (cell, &width) in cells.iter().zip(col_widths) {
        output.push_str(&format!(" {cell:width$} |"));
    }
    output.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
