use std::sync::Arc;
use tokio::sync::Mutex;
use crate::app::core::{App, MessageType};
use crate::mint::{ArtworkFile, MintError, MintRequest, MintVariant};
use crate::utils::format_mist_price;

/// Per-panel submission lifecycle. `Submitting` doubles as the in-flight
/// guard: a panel in that state rejects a second submit until the pending
/// one has resolved either way.
#[derive(Debug, Clone, PartialEq)]
pub enum MintStatus {
    Idle,
    Submitting,
    Success(String),
    Failed(String),
}

impl MintStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, MintStatus::Submitting)
    }
}

/// Form state for the quantity-based panels (public and whitelist).
#[derive(Debug, Clone)]
pub struct QuantityForm {
    pub quantity: u64,
    pub max: u64,
    pub status: MintStatus,
}

impl QuantityForm {
    pub fn new(max: u64) -> Self {
        QuantityForm {
            quantity: 1,
            max,
            status: MintStatus::Idle,
        }
    }

    /// Stepper adjustment, clamped into the panel's legal range. Submit
    /// validation still enforces the bounds on the built request.
    pub fn adjust(&mut self, delta: i64) {
        let adjusted = self.quantity as i64 + delta;
        self.quantity = adjusted.clamp(1, self.max as i64) as u64;
    }
}

/// Form state for the 1-of-1 search panel.
#[derive(Debug, Clone)]
pub struct NamedForm {
    pub name: String,
    pub status: MintStatus,
}

impl NamedForm {
    pub fn new() -> Self {
        NamedForm {
            name: String::new(),
            status: MintStatus::Idle,
        }
    }
}

/// Form state for the OG custom upload panel.
#[derive(Debug, Clone)]
pub struct CustomForm {
    pub name: String,
    pub description: String,
    pub artwork_path: String,
    pub artwork: Option<ArtworkFile>,
    pub status: MintStatus,
}

impl CustomForm {
    pub fn new() -> Self {
        CustomForm {
            name: String::new(),
            description: String::new(),
            artwork_path: String::new(),
            artwork: None,
            status: MintStatus::Idle,
        }
    }

    /// Validate and record the picked file. Size and MIME are rejected
    /// here, at select time, before any request is built.
    pub fn select_artwork(&mut self) -> Result<(), MintError> {
        let artwork = ArtworkFile::load(self.artwork_path.trim())?;
        self.artwork = Some(artwork);
        Ok(())
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.description.clear();
        self.artwork_path.clear();
        self.artwork = None;
    }
}

impl App {
    /// Build a request from the panel's current form state.
    pub fn build_request(&self, variant: MintVariant) -> MintRequest {
        match variant {
            MintVariant::Standard => MintRequest::Standard {
                quantity: self.standard_form.quantity,
            },
            MintVariant::Whitelist => MintRequest::Whitelist {
                quantity: self.whitelist_form.quantity,
            },
            MintVariant::Named => MintRequest::Named {
                name: self.named_form.name.clone(),
            },
            MintVariant::Custom => MintRequest::Custom {
                name: self.custom_form.name.clone(),
                description: self.custom_form.description.clone(),
                artwork: self.custom_form.artwork.clone().unwrap_or(ArtworkFile {
                    path: String::new(),
                    size_bytes: 0,
                    mime: String::new(),
                }),
            },
        }
    }

    pub fn form_status(&self, variant: MintVariant) -> &MintStatus {
        match variant {
            MintVariant::Standard => &self.standard_form.status,
            MintVariant::Whitelist => &self.whitelist_form.status,
            MintVariant::Named => &self.named_form.status,
            MintVariant::Custom => &self.custom_form.status,
        }
    }

    fn set_form_status(&mut self, variant: MintVariant, status: MintStatus) {
        match variant {
            MintVariant::Standard => self.standard_form.status = status,
            MintVariant::Whitelist => self.whitelist_form.status = status,
            MintVariant::Named => self.named_form.status = status,
            MintVariant::Custom => self.custom_form.status = status,
        }
    }

    pub fn mint_in_flight(&self, variant: MintVariant) -> bool {
        self.form_status(variant).is_in_flight()
    }

    /// Kick a submission off without blocking the event loop.
    pub fn handle_mint(app: Arc<Mutex<App>>, variant: MintVariant) {
        tokio::spawn(async move {
            App::submit_mint(app, variant).await;
        });
    }

    /// The full submit flow for one panel: guard, validate, mark
    /// in-flight, release the lock across the collaborator call, then
    /// re-lock and apply the result. Both result arms replace
    /// `Submitting`, so the guard is released on every path.
    pub async fn submit_mint(app: Arc<Mutex<App>>, variant: MintVariant) {
        let (request, submitter) = {
            let mut app_guard = app.lock().await;
            if app_guard.mint_in_flight(variant) {
                return;
            }

            let request = app_guard.build_request(variant);
            if let Err(e) = request.validate(
                app_guard.session.is_connected(),
                app_guard.is_whitelisted,
            ) {
                app_guard.reject_mint(variant, &e);
                return;
            }

            app_guard.set_form_status(variant, MintStatus::Submitting);
            app_guard.set_message(
                MessageType::Info,
                format!("{}: submitting...", variant.label()),
            );
            (request, app_guard.submitter.clone())
        };

        let result = submitter.submit(&request).await;

        let mut app_guard = app.lock().await;
        match result {
            Ok(digest) => app_guard.apply_mint_success(&request, &digest),
            Err(e) => app_guard.apply_mint_failure(variant, &e),
        }
    }

    /// Precondition failure: no submission was started, report and stay
    /// idle.
    fn reject_mint(&mut self, variant: MintVariant, error: &MintError) {
        self.set_form_status(variant, MintStatus::Failed(error.to_string()));
        self.set_message(MessageType::Error, error.to_string());
    }

    fn apply_mint_success(&mut self, request: &MintRequest, digest: &str) {
        let message = success_message(request);
        self.minted += request.minted_count();
        self.set_form_status(request.variant(), MintStatus::Success(message.clone()));
        self.set_message(MessageType::Success, message);
        self.push_activity(format!("[TX] {} {}", digest, request.variant().label()));
        if let Some(metadata) = request.metadata_json() {
            self.push_activity(format!("[METADATA] {}", metadata));
        }

        // the 1-of-1 panels clear their inputs once the piece is minted
        match request.variant() {
            MintVariant::Named => self.named_form.name.clear(),
            MintVariant::Custom => self.custom_form.reset_fields(),
            _ => {}
        }
    }

    /// Collaborator failures are reported uniformly; subtypes are not
    /// distinguished at this layer.
    fn apply_mint_failure(&mut self, variant: MintVariant, error: &MintError) {
        self.set_form_status(variant, MintStatus::Failed(error.to_string()));
        self.set_message(
            MessageType::Error,
            "Failed to mint NFT. Please try again.".to_string(),
        );
        self.push_activity(format!("[TX] {} failed: {}", variant.label(), error));
    }
}

fn success_message(request: &MintRequest) -> String {
    let cost = format_mist_price(request.cost_mist());
    match request {
        MintRequest::Standard { quantity } | MintRequest::Whitelist { quantity } => {
            format!(
                "Successfully minted {} NFT{} for {}",
                quantity,
                if *quantity > 1 { "s" } else { "" },
                cost
            )
        }
        MintRequest::Named { name } => {
            format!(
                "\"{}\" has been minted as a unique 1-of-1 NFT for {}",
                name.trim(),
                cost
            )
        }
        MintRequest::Custom { name, .. } => {
            format!(
                "\"{}\" has been minted as a unique 1-of-1 NFT for {}",
                name.trim(),
                cost
            )
        }
    }
}
