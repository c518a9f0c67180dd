use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use crate::app::{App, CustomField, MintStatus, Section};
use crate::constants::{MAX_STANDARD_MINT, MAX_WHITELIST_MINT, ROYALTY_PERCENT};
use crate::mint::MintVariant;
use crate::utils::format_mist_price;
use super::animations::minting_animation;

/// Render the 2x2 grid of mint panels
pub fn render_mint_grid(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_standard_panel(f, app, top[0], primary_color);
    render_whitelist_panel(f, app, top[1], primary_color);
    render_named_panel(f, app, bottom[0], primary_color);
    render_custom_panel(f, app, bottom[1], primary_color);
}

fn panel_block(title: &str, focused: bool, primary_color: Color) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(primary_color)
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

fn status_line(status: &MintStatus) -> Line<'static> {
    match status {
        MintStatus::Idle => Line::from(Span::styled(
            "Press M to mint",
            Style::default().fg(Color::DarkGray),
        )),
        MintStatus::Submitting => Line::from(Span::styled(
            minting_animation(),
            Style::default().fg(Color::Yellow),
        )),
        MintStatus::Success(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )),
        MintStatus::Failed(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
    }
}

fn field_line(label: &str, value: &str, active: bool, editing: bool) -> Line<'static> {
    let marker = if active { ">> " } else { "   " };
    let shown = if editing {
        format!("{}_", value)
    } else if value.is_empty() {
        "...".to_string()
    } else {
        value.to_string()
    };
    let value_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(shown, value_style),
    ])
}

fn render_standard_panel(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let focused = app.focus == Section::Standard;
    let block = panel_block("PUBLIC MINT", focused, primary_color);
    let request = app.build_request(MintVariant::Standard);

    let lines = vec![
        Line::from(Span::raw("Randomly generated from the collection")),
        Line::from(vec![
            Span::styled("Amount: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("- {} +", app.standard_form.quantity),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (max {})", MAX_STANDARD_MINT),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total cost: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_mist_price(request.cost_mist()),
                Style::default().fg(Color::Green),
            ),
        ]),
        status_line(&app.standard_form.status),
    ];

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(panel, area);
}

fn render_whitelist_panel(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let focused = app.focus == Section::Whitelist;
    let block = panel_block("WHITELIST MINT", focused, primary_color);
    let request = app.build_request(MintVariant::Whitelist);

    let eligibility = if app.is_whitelisted {
        Line::from(Span::styled(
            "♕ Whitelisted - discounted mint unlocked",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Requires an OG ticket in the connected wallet",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        eligibility,
        Line::from(vec![
            Span::styled("Amount: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("- {} +", app.whitelist_form.quantity),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (max {})", MAX_WHITELIST_MINT),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total cost: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_mist_price(request.cost_mist()),
                Style::default().fg(Color::Green),
            ),
        ]),
        status_line(&app.whitelist_form.status),
    ];

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(panel, area);
}

fn render_named_panel(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let focused = app.focus == Section::Named;
    let block = panel_block("1-OF-1 SEARCH", focused, primary_color);
    let request = app.build_request(MintVariant::Named);
    let editing = focused && app.is_editing();

    let lines = vec![
        Line::from(Span::raw("Claim a uniquely named piece")),
        field_line("Name", &app.named_form.name, focused, editing),
        Line::from(vec![
            Span::styled("Price: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_mist_price(request.cost_mist()),
                Style::default().fg(Color::Green),
            ),
        ]),
        status_line(&app.named_form.status),
    ];

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(panel, area);
}

fn render_custom_panel(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let focused = app.focus == Section::Custom;
    let block = panel_block("OG CUSTOM 1-OF-1", focused, primary_color);

    // The OG area renders locked until the whitelist ticket shows up
    if !app.is_whitelisted {
        let lines = vec![
            Line::from(Span::styled(
                "♕ OG EXCLUSIVE AREA",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw("Reserved for OG community members.")),
            Line::from(Span::styled(
                "Connect a wallet holding an OG ticket to unlock",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let panel = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left);
        f.render_widget(panel, area);
        return;
    }

    let request = app.build_request(MintVariant::Custom);
    let editing = |field: CustomField| {
        focused && app.custom_field == field && app.is_editing()
    };
    let active = |field: CustomField| focused && app.custom_field == field;

    let artwork_value = match &app.custom_form.artwork {
        Some(artwork) => format!("{} ({} bytes, {})", artwork.path, artwork.size_bytes, artwork.mime),
        None => app.custom_form.artwork_path.clone(),
    };

    let lines = vec![
        field_line(
            CustomField::Name.label(),
            &app.custom_form.name,
            active(CustomField::Name),
            editing(CustomField::Name),
        ),
        field_line(
            CustomField::Description.label(),
            &app.custom_form.description,
            active(CustomField::Description),
            editing(CustomField::Description),
        ),
        field_line(
            CustomField::Artwork.label(),
            &artwork_value,
            active(CustomField::Artwork),
            editing(CustomField::Artwork),
        ),
        Line::from(vec![
            Span::styled("OG mint cost: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_mist_price(request.cost_mist()),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("  {}% royalties   [→ next field]", ROYALTY_PERCENT),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        status_line(&app.custom_form.status),
    ];

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(panel, area);
}
