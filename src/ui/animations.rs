use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};
use super::ascii_arts::SUINFT_FRAMES;

pub fn current_frame() -> usize {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    (time % 3) as usize
}

/// Render the SUINFT banner animation
pub fn render_banner_animation(f: &mut Frame, area: Rect, highlight_color: Color) {
    let ascii_art = Paragraph::new(SUINFT_FRAMES[current_frame()])
        .style(Style::default().fg(highlight_color))
        .alignment(Alignment::Center);
    f.render_widget(ascii_art, area);
}

/// Animated line shown while a panel's submission is pending
pub fn minting_animation() -> &'static str {
    match current_frame() {
        0 => "║▓▒░ MINTING... ░▒▓║",
        1 => "║▒▓░ MINTING... ░▓▒║",
        _ => "║░▓▒ MINTING... ▒▓░║",
    }
}
