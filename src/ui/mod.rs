// UI module for the SuiNFT minting TUI
// This module handles all the terminal UI rendering logic

mod draw;
mod main_view;
mod mint_panels;
mod animations;
mod ascii_arts;

// Re-export the public functions
pub use draw::draw;
