use std::fs;
use std::path::Path;
use serde_json::json;
use crate::constants::{
    MAX_ARTWORK_BYTES,
    MAX_STANDARD_MINT,
    MAX_WHITELIST_MINT,
    MINT_PRICE_MIST,
    OG_PRICE_MIST,
    WHITELIST_PRICE_MIST,
};

/// The four mint flows offered by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintVariant {
    Standard,
    Whitelist,
    Named,
    Custom,
}

impl MintVariant {
    pub fn label(&self) -> &'static str {
        match self {
            MintVariant::Standard => "Public Mint",
            MintVariant::Whitelist => "Whitelist Mint",
            MintVariant::Named => "1-of-1 Search",
            MintVariant::Custom => "OG Custom Mint",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MintError {
    #[error("Please connect your wallet to mint NFTs")]
    NotConnected,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Only whitelisted addresses can use the whitelist mint")]
    NotEligible,

    #[error("{0}")]
    Submission(String),
}

/// Artwork selected for an OG custom mint. Size and MIME type are checked
/// when the file is picked, before a request is ever built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkFile {
    pub path: String,
    pub size_bytes: u64,
    pub mime: String,
}

impl ArtworkFile {
    pub fn load(path: &str) -> Result<Self, MintError> {
        let metadata = fs::metadata(path)
            .map_err(|_| MintError::InvalidInput(format!("Cannot open artwork file: {}", path)))?;

        if !metadata.is_file() {
            return Err(MintError::InvalidInput(format!("Not a file: {}", path)));
        }

        if metadata.len() > MAX_ARTWORK_BYTES {
            return Err(MintError::InvalidInput(
                "Please select a file smaller than 10MB".to_string(),
            ));
        }

        let mime = mime_for_extension(path).ok_or_else(|| {
            MintError::InvalidInput("Artwork must be an image file (PNG, JPG, GIF)".to_string())
        })?;

        Ok(ArtworkFile {
            path: path.to_string(),
            size_bytes: metadata.len(),
            mime: mime.to_string(),
        })
    }
}

fn mime_for_extension(path: &str) -> Option<&'static str> {
    let extension = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// A mint request is built fresh from the panel's form state at submit
/// time and dropped once its result has been reported.
#[derive(Debug, Clone, PartialEq)]
pub enum MintRequest {
    Standard { quantity: u64 },
    Whitelist { quantity: u64 },
    Named { name: String },
    Custom { name: String, description: String, artwork: ArtworkFile },
}

impl MintRequest {
    pub fn variant(&self) -> MintVariant {
        match self {
            MintRequest::Standard { .. } => MintVariant::Standard,
            MintRequest::Whitelist { .. } => MintVariant::Whitelist,
            MintRequest::Named { .. } => MintVariant::Named,
            MintRequest::Custom { .. } => MintVariant::Custom,
        }
    }

    /// Number of NFTs this request produces when it succeeds.
    pub fn minted_count(&self) -> u64 {
        match self {
            MintRequest::Standard { quantity } | MintRequest::Whitelist { quantity } => *quantity,
            MintRequest::Named { .. } | MintRequest::Custom { .. } => 1,
        }
    }

    /// Total cost in MIST. The 1-of-1 flows are priced as uniques.
    pub fn cost_mist(&self) -> u64 {
        match self {
            MintRequest::Standard { quantity } => quantity * MINT_PRICE_MIST,
            MintRequest::Whitelist { quantity } => quantity * WHITELIST_PRICE_MIST,
            MintRequest::Named { .. } => OG_PRICE_MIST,
            MintRequest::Custom { .. } => OG_PRICE_MIST,
        }
    }

    /// Metadata payload recorded for custom 1-of-1 mints.
    pub fn metadata_json(&self) -> Option<String> {
        match self {
            MintRequest::Custom { name, description, artwork } => Some(
                json!({
                    "name": name.trim(),
                    "description": description.trim(),
                    "image": artwork.path,
                    "mime": artwork.mime,
                    "size": artwork.size_bytes,
                })
                .to_string(),
            ),
            _ => None,
        }
    }

    /// Preconditions in order, first failure wins: connection, then the
    /// variant's field bounds, then (whitelist only) eligibility.
    pub fn validate(&self, connected: bool, is_whitelisted: bool) -> Result<(), MintError> {
        if !connected {
            return Err(MintError::NotConnected);
        }

        self.validate_fields()?;

        if self.variant() == MintVariant::Whitelist && !is_whitelisted {
            return Err(MintError::NotEligible);
        }

        Ok(())
    }

    fn validate_fields(&self) -> Result<(), MintError> {
        match self {
            MintRequest::Standard { quantity } => {
                if !(1..=MAX_STANDARD_MINT).contains(quantity) {
                    return Err(MintError::InvalidInput(format!(
                        "Mint amount must be between 1 and {}",
                        MAX_STANDARD_MINT
                    )));
                }
            }
            MintRequest::Whitelist { quantity } => {
                if !(1..=MAX_WHITELIST_MINT).contains(quantity) {
                    return Err(MintError::InvalidInput(format!(
                        "Whitelist mint amount must be between 1 and {}",
                        MAX_WHITELIST_MINT
                    )));
                }
            }
            MintRequest::Named { name } => {
                if name.trim().is_empty() {
                    return Err(MintError::InvalidInput(
                        "Please enter a name for your 1-of-1 NFT".to_string(),
                    ));
                }
            }
            MintRequest::Custom { name, description, artwork } => {
                if name.trim().is_empty()
                    || description.trim().is_empty()
                    || artwork.path.trim().is_empty()
                {
                    return Err(MintError::InvalidInput(
                        "Please fill in all fields and select an image".to_string(),
                    ));
                }
                if artwork.size_bytes > MAX_ARTWORK_BYTES {
                    return Err(MintError::InvalidInput(
                        "Please select a file smaller than 10MB".to_string(),
                    ));
                }
                if !artwork.mime.starts_with("image/") {
                    return Err(MintError::InvalidInput(
                        "Artwork must be an image file (PNG, JPG, GIF)".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(size_bytes: u64, mime: &str) -> ArtworkFile {
        ArtworkFile {
            path: "art.png".to_string(),
            size_bytes,
            mime: mime.to_string(),
        }
    }

    #[test]
    fn test_disconnected_rejected_before_field_checks() {
        // quantity is out of bounds too, but the connection check wins
        let request = MintRequest::Standard { quantity: 99 };
        assert_eq!(request.validate(false, true), Err(MintError::NotConnected));
    }

    #[test]
    fn test_standard_quantity_boundaries() {
        assert!(MintRequest::Standard { quantity: 1 }.validate(true, false).is_ok());
        assert!(MintRequest::Standard { quantity: 10 }.validate(true, false).is_ok());
        assert!(matches!(
            MintRequest::Standard { quantity: 0 }.validate(true, false),
            Err(MintError::InvalidInput(_))
        ));
        assert!(matches!(
            MintRequest::Standard { quantity: 11 }.validate(true, false),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_whitelist_quantity_boundaries() {
        assert!(MintRequest::Whitelist { quantity: 1 }.validate(true, true).is_ok());
        assert!(MintRequest::Whitelist { quantity: 4 }.validate(true, true).is_ok());
        assert!(matches!(
            MintRequest::Whitelist { quantity: 5 }.validate(true, true),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_whitelist_requires_eligibility() {
        let request = MintRequest::Whitelist { quantity: 2 };
        assert_eq!(request.validate(true, false), Err(MintError::NotEligible));
    }

    #[test]
    fn test_invalid_quantity_reported_before_eligibility() {
        let request = MintRequest::Whitelist { quantity: 5 };
        assert!(matches!(
            request.validate(true, false),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_named_rejects_whitespace_only_name() {
        let request = MintRequest::Named { name: "  ".to_string() };
        assert!(matches!(
            request.validate(true, false),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_named_accepts_padded_name() {
        let request = MintRequest::Named { name: " Astro Ape ".to_string() };
        assert!(request.validate(true, false).is_ok());
    }

    #[test]
    fn test_custom_requires_all_fields() {
        let request = MintRequest::Custom {
            name: "Genesis".to_string(),
            description: "".to_string(),
            artwork: artwork(1024, "image/png"),
        };
        assert!(matches!(
            request.validate(true, true),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_custom_rejects_oversized_artwork() {
        let request = MintRequest::Custom {
            name: "Genesis".to_string(),
            description: "First of its kind".to_string(),
            artwork: artwork(MAX_ARTWORK_BYTES + 1, "image/png"),
        };
        assert!(matches!(
            request.validate(true, true),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_custom_rejects_non_image_mime() {
        let request = MintRequest::Custom {
            name: "Genesis".to_string(),
            description: "First of its kind".to_string(),
            artwork: artwork(1024, "application/pdf"),
        };
        assert!(matches!(
            request.validate(true, true),
            Err(MintError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_custom_valid_request_passes() {
        let request = MintRequest::Custom {
            name: "Genesis".to_string(),
            description: "First of its kind".to_string(),
            artwork: artwork(MAX_ARTWORK_BYTES, "image/png"),
        };
        assert!(request.validate(true, true).is_ok());
        assert_eq!(request.minted_count(), 1);
    }

    #[test]
    fn test_artwork_load_rejects_oversized_file() {
        let path = std::env::temp_dir().join("suinft_oversized.png");
        let data = vec![0u8; (MAX_ARTWORK_BYTES + 1) as usize];
        fs::write(&path, &data).unwrap();
        let result = ArtworkFile::load(path.to_str().unwrap());
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MintError::InvalidInput(_))));
    }

    #[test]
    fn test_artwork_load_rejects_non_image_extension() {
        let path = std::env::temp_dir().join("suinft_artwork.txt");
        fs::write(&path, b"not an image").unwrap();
        let result = ArtworkFile::load(path.to_str().unwrap());
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MintError::InvalidInput(_))));
    }

    #[test]
    fn test_artwork_load_accepts_small_png() {
        let path = std::env::temp_dir().join("suinft_artwork.png");
        fs::write(&path, b"\x89PNG\r\n").unwrap();
        let result = ArtworkFile::load(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(result.mime, "image/png");
        assert_eq!(result.size_bytes, 6);
    }

    #[test]
    fn test_costs_scale_with_quantity() {
        assert_eq!(MintRequest::Standard { quantity: 3 }.cost_mist(), 300_000_000);
        assert_eq!(MintRequest::Whitelist { quantity: 4 }.cost_mist(), 200_000_000);
        assert_eq!(
            MintRequest::Named { name: "Nova".to_string() }.cost_mist(),
            OG_PRICE_MIST
        );
    }

    #[test]
    fn test_custom_metadata_json_trims_fields() {
        let request = MintRequest::Custom {
            name: " Genesis ".to_string(),
            description: " First of its kind ".to_string(),
            artwork: artwork(1024, "image/png"),
        };
        let metadata = request.metadata_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&metadata).unwrap();
        assert_eq!(value["name"], "Genesis");
        assert_eq!(value["mime"], "image/png");
        assert!(MintRequest::Standard { quantity: 1 }.metadata_json().is_none());
    }
}
