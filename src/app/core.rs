use crate::app::eligibility::OwnershipState;
use crate::app::mint::{CustomForm, NamedForm, QuantityForm};
use crate::app::session::WalletSession;
use crate::app::ui_state::{CustomField, EditTarget, Section};
use crate::constants::{ACTIVITY_LOG_MAX_LINES, MAX_STANDARD_MINT, MAX_WHITELIST_MINT, MINTED_AT_LAUNCH};
use crate::transactions::MintSubmitter;
use crate::utils::NetworkState;
use crate::wallet::Wallet;

#[derive(Clone, PartialEq)]
pub enum MessageType {
    Error,
    Info,
    Success,
}

#[derive(Clone)]
pub struct App {
    pub network_state: NetworkState,
    pub(crate) wallet: Option<Wallet>,
    pub session: WalletSession,
    pub ownership: OwnershipState,
    pub is_whitelisted: bool,
    pub submitter: MintSubmitter,
    pub standard_form: QuantityForm,
    pub whitelist_form: QuantityForm,
    pub named_form: NamedForm,
    pub custom_form: CustomForm,
    pub minted: u64,
    pub focus: Section,
    pub custom_field: CustomField,
    pub editing: Option<EditTarget>,
    pub is_switching_network: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub message_type: MessageType,
    pub activity_log: Vec<String>,
}

impl App {
    /// The app starts disconnected; the wallet handle and session data
    /// only exist after a successful connect.
    pub fn new(network_state: NetworkState) -> App {
        App {
            network_state,
            wallet: None,
            session: WalletSession::disconnected(),
            ownership: OwnershipState::NotQueried,
            is_whitelisted: false,
            submitter: MintSubmitter::new(),
            standard_form: QuantityForm::new(MAX_STANDARD_MINT),
            whitelist_form: QuantityForm::new(MAX_WHITELIST_MINT),
            named_form: NamedForm::new(),
            custom_form: CustomForm::new(),
            minted: MINTED_AT_LAUNCH,
            focus: Section::Standard,
            custom_field: CustomField::Name,
            editing: None,
            is_switching_network: false,
            error_message: None,
            message_type: MessageType::Info,
            success_message: None,
            activity_log: Vec::new(),
        }
    }

    // clear error and success message
    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    // set message method
    pub fn set_message(&mut self, message_type: MessageType, message: String) {
        self.message_type = message_type.clone();
        match message_type {
            MessageType::Error => {
                self.error_message = Some(message);
                self.success_message = None;
            }
            MessageType::Success => {
                self.success_message = Some(message);
                self.error_message = None;
            }
            MessageType::Info => {
                self.error_message = Some(message);
                self.success_message = None;
            }
        }
    }

    /// Append to the bounded activity log pane.
    pub fn push_activity(&mut self, line: String) {
        self.activity_log.push(line);
        if self.activity_log.len() > ACTIVITY_LOG_MAX_LINES {
            self.activity_log.remove(0);
        }
    }
}
