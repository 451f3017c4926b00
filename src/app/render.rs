// ==========================================
// 航空券割引締切日计算 - 结果表渲染
// ==========================================
// 职责: 将 DeadlineTable 渲染为终端文本表 / CSV
// 红线: 只读结果，不参与计算；颜色仅由 RowColor 决定
// ==========================================

use std::io::Write;

use owo_colors::OwoColorize;

use crate::api::deadline_api::{DeadlineRow, DeadlineTable};
use crate::domain::types::{RowColor, UrgencyClass};
use crate::i18n::{t, t_with_args};

const COLUMN_SEPARATOR: &str = "  ";

/// 终端显示宽度（全角字符计 2 列）
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6 => 2,
            _ => 1,
        })
        .sum()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// 按行着色（橙色终端无标准色，用 truecolor）
fn paint(color: RowColor, line: &str) -> String {
    match color {
        RowColor::Red => line.red().to_string(),
        RowColor::Orange => line.truecolor(255, 165, 0).to_string(),
        RowColor::Default => line.to_string(),
    }
}

fn days_cell(row: &DeadlineRow) -> String {
    t_with_args("table.days_value", &[("days", &row.days_remaining.to_string())])
}

fn row_cells(row: &DeadlineRow) -> [String; 4] {
    [
        row.airline.to_string(),
        row.plan_name.clone(),
        row.deadline_date.format("%Y-%m-%d").to_string(),
        days_cell(row),
    ]
}

/// 渲染结果表
///
/// # 参数
/// - table: 已排序的结果表
/// - use_color: 是否输出 ANSI 颜色（红 = 締切済み, 橙 = 締切間近）
///
/// # 返回
/// - 空表返回空字符串（调用方省略结果区）
/// - 不着色时在非正常行后附加紧急等级文字
pub fn render_text_table(table: &DeadlineTable, use_color: bool) -> String {
    if table.is_empty() {
        return String::new();
    }

    let headers = [
        t("table.airline"),
        t("table.plan"),
        t("table.deadline"),
        t("table.days_left"),
    ];
    let body: Vec<[String; 4]> = table.rows.iter().map(row_cells).collect();

    let mut widths = headers.clone().map(|h| display_width(&h));
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(display_width(cell));
        }
    }

    let format_line = |cells: &[String; 4]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&t("table.heading"));
    out.push('\n');
    out.push_str(&format_line(&headers));
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + COLUMN_SEPARATOR.len() * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for (row, cells) in table.rows.iter().zip(body.iter()) {
        let line = format_line(cells);
        if use_color {
            out.push_str(&paint(row.color, &line));
        } else if row.urgency != UrgencyClass::Normal {
            out.push_str(&line);
            out.push_str(&format!(" ({})", t(row.urgency.i18n_key())));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out
}

/// 渲染注意事项
pub fn render_notices() -> String {
    let mut out = String::new();
    out.push_str(&format!("### {}\n", t("notice.heading")));
    for key in [
        "notice.deadline_basis",
        "notice.estimate_only",
        "notice.check_official",
    ] {
        out.push_str(&format!("- {}\n", t(key)));
    }
    out
}

/// 导出 CSV
///
/// 列: 航空会社, 割引プラン, 予約締切日, 予約締切まで(天数), 紧急等级
pub fn write_csv<W: Write>(table: &DeadlineTable, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        t("table.airline"),
        t("table.plan"),
        t("table.deadline"),
        t("table.days_left"),
        "urgency".to_string(),
    ])?;

    for row in &table.rows {
        wtr.write_record([
            row.airline.to_string(),
            row.plan_name.clone(),
            row.deadline_date.format("%Y-%m-%d").to_string(),
            row.days_remaining.to_string(),
            row.urgency.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
