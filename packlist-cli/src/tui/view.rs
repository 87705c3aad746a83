//! Dashboard rendering

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs,
    Wrap,
};
use ratatui::Frame;

use crate::data::{CleanRow, MISSING_VALUE};
use crate::query::{gross_by_unit, summarize, top_by_gross, RowFilter};

use super::app::{App, Tab};

const ACCENT: Color = Color::Cyan;

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .select(app.tab_index())
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Equipment & Order Search "),
        );
    frame.render_widget(tabs, header);

    match app.tab {
        Tab::Search => draw_search(frame, app, body),
        Tab::Orders => draw_orders(frame, app, body),
        Tab::Analysis => draw_analysis(frame, app, body),
        Tab::Help => draw_help(frame, body),
    }

    let hints = match app.tab {
        Tab::Search => "type to search | ^U unit | ^O order | ^L clear | ↑↓ select | Tab switch | Esc quit",
        Tab::Orders => "↑↓ select order | Tab switch | q/Esc quit",
        _ => "Tab switch | q/Esc quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let [input, status, results, detail] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(8),
    ])
    .areas(area);

    let query = Paragraph::new(app.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search (Unit / Order No / Item No / Description) "),
    );
    frame.render_widget(query, input);

    let summary = summarize(&app.table, &app.filtered);
    let all = "All".to_string();
    let status_line = Line::from(vec![
        Span::styled("Unit: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(app.unit_filter().unwrap_or(&all).clone()),
        Span::styled("  Order: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(app.order_filter().unwrap_or(&all).clone()),
        Span::styled("  Rows: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(summary.rows.to_string()),
        Span::styled("  Net: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{:.2} kg", summary.net_total)),
        Span::styled("  Gross: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{:.2} kg", summary.gross_total)),
    ]);
    frame.render_widget(Paragraph::new(status_line), status);

    render_row_table(frame, app, &app.filtered, Some(app.selected), results);

    let detail_text = match app.filtered.get(app.selected) {
        Some(&i) => row_detail(&app.table.rows[i]),
        None => vec![Line::from("no matching rows")],
    };
    let detail_widget = Paragraph::new(detail_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Detail "));
    frame.render_widget(detail_widget, detail);
}

fn draw_orders(frame: &mut Frame, app: &App, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(area);

    let items: Vec<ListItem> = app.orders.iter().map(|o| ListItem::new(o.as_str())).collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
        .block(Block::default().borders(Borders::ALL).title(" Orders "));
    let mut state = ListState::default();
    state.select((!app.orders.is_empty()).then_some(app.order_selected));
    frame.render_stateful_widget(list, left, &mut state);

    let [status, results] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(right);

    let indices = match app.orders.get(app.order_selected) {
        Some(order) => RowFilter {
            order_no: Some(order.clone()),
            ..Default::default()
        }
        .apply(&app.table),
        None => Vec::new(),
    };
    let summary = summarize(&app.table, &indices);
    let status_line = format!(
        "Items: {}   Net: {:.2} kg   Gross: {:.2} kg",
        summary.rows, summary.net_total, summary.gross_total
    );
    frame.render_widget(Paragraph::new(status_line), status);

    render_row_table(frame, app, &indices, None, results);
}

fn draw_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let totals = gross_by_unit(&app.table);
    let unit_data: Vec<(&str, u64)> = totals
        .iter()
        .map(|(unit, total)| (unit.as_str(), total.round() as u64))
        .collect();
    let unit_chart = BarChart::default()
        .data(&unit_data)
        .bar_width(8)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Gross weight by unit (kg) "),
        );
    frame.render_widget(unit_chart, left);

    let top = top_by_gross(&app.table, 10);
    let labels: Vec<String> = top
        .iter()
        .map(|&i| truncated(&app.table.rows[i].description, 10))
        .collect();
    let top_data: Vec<(&str, u64)> = top
        .iter()
        .zip(&labels)
        .map(|(&i, label)| {
            let gross = app.table.rows[i].gross_num.unwrap_or(0.0);
            (label.as_str(), gross.round() as u64)
        })
        .collect();
    let top_chart = BarChart::default()
        .data(&top_data)
        .bar_width(11)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::Black).bg(Color::Magenta))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Top 10 by gross weight (kg) "),
        );
    frame.render_widget(top_chart, right);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("What is this?"),
        Line::from("  Every equipment row and order from the source workbook, cleaned"),
        Line::from("  into one table and searchable from a single screen."),
        Line::from(""),
        Line::from("Searching"),
        Line::from("  Type into the search box; the text is matched against unit,"),
        Line::from("  order number, item number, and description. Ctrl-U and Ctrl-O"),
        Line::from("  cycle the unit and order filters; all filters combine."),
        Line::from(""),
        Line::from(format!("What does \"{}\" mean?", MISSING_VALUE)),
        Line::from("  That cell was never filled in in the workbook. Rows are kept and"),
        Line::from("  the gap is shown deliberately; it never counts into the totals."),
    ];
    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(help, area);
}

fn render_row_table(
    frame: &mut Frame,
    app: &App,
    indices: &[usize],
    selected: Option<usize>,
    area: Rect,
) {
    let header = Row::new(vec![
        "Unit",
        "Order No",
        "Item No",
        "Description",
        "Qty",
        "Net (Kg)",
        "Gross (Kg)",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = indices
        .iter()
        .map(|&i| {
            let r = &app.table.rows[i];
            Row::new(vec![
                r.unit.clone(),
                r.order_no.clone(),
                r.item_no.clone(),
                r.description.clone(),
                r.quantity.clone(),
                r.net_weight.clone(),
                r.gross_weight.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Results "));

    let mut state = TableState::default();
    state.select(selected.filter(|_| !indices.is_empty()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn row_detail(row: &CleanRow) -> Vec<Line<'_>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(
            row.description.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Unit: ", bold),
            Span::raw(&row.unit),
            Span::styled("   Order No: ", bold),
            Span::raw(&row.order_no),
            Span::styled("   Item No: ", bold),
            Span::raw(&row.item_no),
        ]),
        Line::from(vec![
            Span::styled("Package Form: ", bold),
            Span::raw(&row.package_form),
            Span::styled("   Quantity: ", bold),
            Span::raw(&row.quantity),
            Span::styled("   Weighing: ", bold),
            Span::raw(&row.weighing_method),
        ]),
        Line::from(vec![
            Span::styled("Net: ", bold),
            Span::raw(format!("{} kg", row.net_weight)),
            Span::styled("   Gross: ", bold),
            Span::raw(format!("{} kg", row.gross_weight)),
        ]),
        Line::from(vec![
            Span::styled("Dimensions (L×W×H): ", bold),
            Span::raw(format!("{} × {} × {}", row.length, row.width, row.height)),
        ]),
    ]
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
