use crate::app::core::{App, MessageType};
use crate::mint::MintVariant;

// Input length caps for the text fields
const MAX_NAME_LEN: usize = 64;
const MAX_DESCRIPTION_LEN: usize = 200;
const MAX_PATH_LEN: usize = 200;

/// The four mint panels the user can focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Standard,
    Whitelist,
    Named,
    Custom,
}

impl Section {
    pub fn variant(&self) -> MintVariant {
        match self {
            Section::Standard => MintVariant::Standard,
            Section::Whitelist => MintVariant::Whitelist,
            Section::Named => MintVariant::Named,
            Section::Custom => MintVariant::Custom,
        }
    }

    pub fn next(&self) -> Section {
        match self {
            Section::Standard => Section::Whitelist,
            Section::Whitelist => Section::Named,
            Section::Named => Section::Custom,
            Section::Custom => Section::Standard,
        }
    }

    pub fn previous(&self) -> Section {
        match self {
            Section::Standard => Section::Custom,
            Section::Whitelist => Section::Standard,
            Section::Named => Section::Whitelist,
            Section::Custom => Section::Named,
        }
    }
}

/// Fields of the OG custom panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomField {
    Name,
    Description,
    Artwork,
}

impl CustomField {
    pub fn next(&self) -> CustomField {
        match self {
            CustomField::Name => CustomField::Description,
            CustomField::Description => CustomField::Artwork,
            CustomField::Artwork => CustomField::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomField::Name => "NFT Name",
            CustomField::Description => "Description",
            CustomField::Artwork => "Artwork Path",
        }
    }
}

/// Text field currently capturing keystrokes, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    SearchName,
    CustomName,
    CustomDescription,
    CustomArtwork,
}

impl App {
    pub fn next_section(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_section(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Stepper for the quantity panels; ignored elsewhere.
    pub fn adjust_quantity(&mut self, delta: i64) {
        match self.focus {
            Section::Standard => self.standard_form.adjust(delta),
            Section::Whitelist => self.whitelist_form.adjust(delta),
            _ => {}
        }
    }

    pub fn next_custom_field(&mut self) {
        if self.focus == Section::Custom && self.editing.is_none() {
            self.custom_field = self.custom_field.next();
        }
    }

    /// Start editing the focused panel's text field. Quantity panels have
    /// none, so this is a no-op there.
    pub fn begin_edit(&mut self) -> bool {
        let target = match self.focus {
            Section::Named => Some(EditTarget::SearchName),
            Section::Custom => Some(match self.custom_field {
                CustomField::Name => EditTarget::CustomName,
                CustomField::Description => EditTarget::CustomDescription,
                CustomField::Artwork => EditTarget::CustomArtwork,
            }),
            _ => None,
        };
        self.editing = target;
        target.is_some()
    }

    pub fn edit_char(&mut self, c: char) {
        if !c.is_ascii() || c.is_control() {
            return;
        }
        let Some(target) = self.editing else {
            return;
        };
        let (buffer, max_len) = self.edit_buffer_mut(target);
        if buffer.len() < max_len {
            buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        let Some(target) = self.editing else {
            return;
        };
        let (buffer, _) = self.edit_buffer_mut(target);
        buffer.pop();
    }

    /// Leave edit mode. Committing the artwork path runs the file checks
    /// immediately, so an oversized or non-image pick is rejected here,
    /// long before submit.
    pub fn commit_edit(&mut self) {
        let Some(target) = self.editing.take() else {
            return;
        };
        if target == EditTarget::CustomArtwork {
            match self.custom_form.select_artwork() {
                Ok(()) => {
                    let selected = self
                        .custom_form
                        .artwork
                        .as_ref()
                        .map(|artwork| format!("Artwork selected: {} ({} bytes)", artwork.path, artwork.size_bytes))
                        .unwrap_or_default();
                    self.set_message(MessageType::Success, selected);
                }
                Err(e) => {
                    self.custom_form.artwork = None;
                    self.set_message(MessageType::Error, e.to_string());
                }
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn edit_buffer_mut(&mut self, target: EditTarget) -> (&mut String, usize) {
        match target {
            EditTarget::SearchName => (&mut self.named_form.name, MAX_NAME_LEN),
            EditTarget::CustomName => (&mut self.custom_form.name, MAX_NAME_LEN),
            EditTarget::CustomDescription => {
                (&mut self.custom_form.description, MAX_DESCRIPTION_LEN)
            }
            EditTarget::CustomArtwork => (&mut self.custom_form.artwork_path, MAX_PATH_LEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::constants::MAX_ARTWORK_BYTES;
    use crate::utils::NetworkState;

    #[test]
    fn test_section_cycle_is_closed() {
        let mut section = Section::Standard;
        for _ in 0..4 {
            section = section.next();
        }
        assert_eq!(section, Section::Standard);
        assert_eq!(Section::Standard.previous(), Section::Custom);
    }

    #[test]
    fn test_quantity_adjust_targets_focused_panel() {
        let mut app = App::new(NetworkState::new());
        app.focus = Section::Whitelist;
        app.adjust_quantity(2);
        assert_eq!(app.whitelist_form.quantity, 3);
        assert_eq!(app.standard_form.quantity, 1);

        // no text-field panels step quantities
        app.focus = Section::Named;
        app.adjust_quantity(5);
        assert_eq!(app.whitelist_form.quantity, 3);
    }

    #[test]
    fn test_edit_flow_fills_search_name() {
        let mut app = App::new(NetworkState::new());
        app.focus = Section::Named;
        assert!(app.begin_edit());
        for c in "Nova".chars() {
            app.edit_char(c);
        }
        app.edit_backspace();
        app.commit_edit();
        assert_eq!(app.named_form.name, "Nov");
        assert!(!app.is_editing());
    }

    #[test]
    fn test_begin_edit_is_noop_on_quantity_panels() {
        let mut app = App::new(NetworkState::new());
        app.focus = Section::Standard;
        assert!(!app.begin_edit());
        assert!(!app.is_editing());
    }

    #[test]
    fn test_oversized_artwork_rejected_at_select_time() {
        let path = std::env::temp_dir().join("suinft_select_oversized.png");
        let data = vec![0u8; (MAX_ARTWORK_BYTES + 1) as usize];
        fs::write(&path, &data).unwrap();

        let mut app = App::new(NetworkState::new());
        app.focus = Section::Custom;
        app.custom_field = CustomField::Artwork;
        app.begin_edit();
        for c in path.to_str().unwrap().chars() {
            app.edit_char(c);
        }
        app.commit_edit();
        fs::remove_file(&path).ok();

        assert!(app.custom_form.artwork.is_none());
        assert!(app.error_message.is_some());
    }
}
