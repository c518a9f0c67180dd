use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::app::App;
use crate::constants::{MINT_PRICE_MIST, OG_PRICE_MIST, TOTAL_SUPPLY, WHITELIST_PRICE_MIST};
use crate::utils::{format_mist_price, format_sui_balance};
use super::animations::render_banner_animation;
use super::ascii_arts::UiConstants;
use super::mint_panels::render_mint_grid;
use textwrap;

/// Render the main application UI
pub fn draw_main(f: &mut Frame, app: &mut App) {
    // Setup color theme: warm while disconnected, cool once connected
    let connected = app.session.is_connected();
    let base_color = if connected { Color::Cyan } else { Color::Magenta };
    let highlight_color = if connected { Color::LightBlue } else { Color::LightRed };
    let secondary_color = if connected { Color::LightBlue } else { Color::Red };
    let dim_color = Color::DarkGray;

    // Full screen border
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(base_color));
    f.render_widget(main_block, f.size());

    // Main layout structure
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(8),   // SUINFT ASCII art
            Constraint::Length(3),   // System status information
            Constraint::Length(3),   // Collection stats
            Constraint::Min(16),     // Mint panels and side column
            Constraint::Length(6),   // Message area
            Constraint::Length(3),   // Control information
        ])
        .split(f.size());

    render_banner_animation(f, main_layout[0], highlight_color);

    // System status indicators
    let status_indicators = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(main_layout[1]);

    // Display current network
    let network_status = format!(
        "{} NETWORK: {}",
        UiConstants::NETWORK_PROGRESS,
        app.network_state.get_current_network().to_uppercase()
    );
    let network_info = Paragraph::new(network_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(network_info, status_indicators[0]);

    // Tagline
    let tagline_text = format!("╔══════╡ {} ╞══════╗", UiConstants::BUILD_ON_SUI.to_uppercase());
    let tagline = Paragraph::new(tagline_text)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(tagline, status_indicators[1]);

    // Display wallet address
    let wallet_status = match app.session.short_address() {
        Some(address) => format!("{} WALLET: {}", UiConstants::WALLET_PROGRESS, address),
        None => format!("{} WALLET: not connected [C]", UiConstants::WALLET_PROGRESS),
    };
    let wallet_info = Paragraph::new(wallet_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(wallet_info, status_indicators[2]);

    // Collection stats row
    render_stats_row(f, app, main_layout[2], base_color, secondary_color);

    // Split main content area into left and right sections
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(36),  // Left area
            Constraint::Percentage(64),  // Right area
        ])
        .split(main_layout[3]);

    // Left section layout
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Network block
            Constraint::Length(3),  // Balance
            Constraint::Length(3),  // Whitelist status
            Constraint::Min(0),     // Activity log
        ])
        .split(content_layout[0]);

    render_network_block(f, app, left_chunks[0], base_color, secondary_color);
    render_balance_block(f, app, left_chunks[1], base_color, secondary_color);
    render_whitelist_block(f, app, left_chunks[2], base_color, secondary_color);
    render_activity_log(f, app, left_chunks[3], base_color, secondary_color);

    // Mint panels on the right
    render_mint_grid(f, app, content_layout[1], base_color);

    // Message display area
    render_message_area(f, app, main_layout[4], base_color);

    // Controls at the bottom
    render_help_controls(f, app, main_layout[5], dim_color, highlight_color);
}

fn render_stats_row(f: &mut Frame, app: &App, area: Rect, primary_color: Color, secondary_color: Color) {
    let stats_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let entries = [
        ("MINTED", format!("{} / {}", app.minted, TOTAL_SUPPLY)),
        ("PUBLIC PRICE", format_mist_price(MINT_PRICE_MIST)),
        ("WL PRICE", format_mist_price(WHITELIST_PRICE_MIST)),
        ("OG 1-OF-1", format_mist_price(OG_PRICE_MIST)),
    ];

    for (i, (title, value)) in entries.iter().enumerate() {
        let block = Block::default()
            .title(*title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(primary_color));
        let text = Paragraph::new(value.clone())
            .block(block)
            .style(Style::default().fg(secondary_color))
            .alignment(Alignment::Center);
        f.render_widget(text, stats_chunks[i]);
    }
}

fn render_network_block(f: &mut Frame, app: &App, area: Rect, primary_color: Color, secondary_color: Color) {
    let network_block = Block::default()
        .title(if app.is_switching_network {
            "SELECT NETWORK (1-3)"
        } else {
            "CURRENT NETWORK"
        })
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    let network_text = if app.is_switching_network {
        app.get_network_options()
    } else {
        format!("{}  [Press N to switch]", app.network_state.get_current_network().to_uppercase())
    };

    let network_paragraph = Paragraph::new(network_text)
        .block(network_block)
        .style(Style::default().fg(if app.is_switching_network { Color::Yellow } else { secondary_color }))
        .alignment(Alignment::Left);

    f.render_widget(network_paragraph, area);
}

fn render_balance_block(f: &mut Frame, app: &App, area: Rect, primary_color: Color, secondary_color: Color) {
    let balance_block = Block::default()
        .title("SUI BALANCE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    let balance_text = match app.session.balance() {
        Some(balance) => format_sui_balance(balance),
        None => "--".to_string(),
    };

    let balance = Paragraph::new(balance_text)
        .block(balance_block)
        .style(Style::default().fg(secondary_color))
        .alignment(Alignment::Left);

    f.render_widget(balance, area);
}

fn render_whitelist_block(f: &mut Frame, app: &App, area: Rect, primary_color: Color, secondary_color: Color) {
    let whitelist_block = Block::default()
        .title("ACCESS TIER")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    // A failed ticket query renders the same as "not whitelisted"
    let (text, style) = if app.is_whitelisted {
        ("♕ OG WHITELISTED", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("PUBLIC", Style::default().fg(secondary_color))
    };

    let tier = Paragraph::new(text)
        .block(whitelist_block)
        .style(style)
        .alignment(Alignment::Left);

    f.render_widget(tier, area);
}

fn render_activity_log(f: &mut Frame, app: &App, area: Rect, primary_color: Color, secondary_color: Color) {
    let log_block = Block::default()
        .title(" ACTIVITY ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    // Show the tail of the log, newest lines at the bottom
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.activity_log.len().saturating_sub(visible);

    let items: Vec<ListItem> = app.activity_log[start..]
        .iter()
        .map(|line| {
            let style = if line.contains("failed") {
                Style::default().fg(Color::Red)
            } else if line.starts_with("[TX]") {
                Style::default().fg(secondary_color)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let log_list = List::new(items).block(log_block);
    f.render_widget(log_list, area);
}

fn render_message_area(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let message_block = Block::default()
        .title(" MESSAGE ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    if let Some(error) = &app.error_message {
        // Calculate available width (minus borders and margins)
        let available_width = area.width.saturating_sub(crate::constants::MESSAGE_AREA_MARGIN);
        let wrapped_text = textwrap::wrap(error, available_width as usize)
            .join("\n");

        let message_text = Paragraph::new(wrapped_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Left)
            .block(message_block);

        f.render_widget(message_text, area);
    } else if let Some(success) = &app.success_message {
        let available_width = area.width.saturating_sub(crate::constants::MESSAGE_AREA_MARGIN);
        let wrapped_text = textwrap::wrap(success, available_width as usize)
            .join("\n");

        let message_text = Paragraph::new(wrapped_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Left)
            .block(message_block);

        f.render_widget(message_text, area);
    } else {
        // Just show the border when no message
        f.render_widget(message_block, area);
    }
}

fn render_help_controls(f: &mut Frame, app: &App, area: Rect, dim_color: Color, highlight_color: Color) {
    let help_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim_color));

    let help_text = if app.is_editing() {
        vec![
            Line::from(vec![
                Span::styled("ENTER", Style::default().fg(Color::Yellow)),
                Span::raw(": Confirm field"),
                Span::raw("  |  "),
                Span::styled("ESC", Style::default().fg(Color::Yellow)),
                Span::raw(": Cancel"),
            ]),
        ]
    } else if app.is_switching_network {
        vec![
            Line::from(vec![
                Span::styled("1", Style::default().fg(Color::Yellow)),
                Span::raw(": DEVNET"),
                Span::raw("  |  "),
                Span::styled("2", Style::default().fg(Color::Yellow)),
                Span::raw(": TESTNET"),
                Span::raw("  |  "),
                Span::styled("3", Style::default().fg(Color::Yellow)),
                Span::raw(": MAINNET"),
                Span::raw("  |  "),
                Span::styled("ESC", Style::default().fg(Color::Yellow)),
                Span::raw(": Cancel"),
            ]),
        ]
    } else {
        vec![
            Line::from(vec![
                Span::styled("Q", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" QUIT"),
                Span::raw("   "),
                Span::styled("C", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" CONNECT"),
                Span::raw("   "),
                Span::styled("D", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" DISCONNECT"),
                Span::raw("   "),
                Span::styled("TAB", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" PANEL"),
                Span::raw("   "),
                Span::styled("↑/↓", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" AMOUNT"),
                Span::raw("   "),
                Span::styled("ENTER", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" EDIT FIELD"),
                Span::raw("   "),
                Span::styled("M", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" MINT"),
                Span::raw("   "),
                Span::styled("R", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" REFRESH"),
            ]),
        ]
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(dim_color))
        .alignment(Alignment::Center)
        .block(help_block);

    f.render_widget(help, area);
}
