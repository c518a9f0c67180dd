// module declaration
pub mod core;
pub mod session;
pub mod eligibility;
pub mod mint;
pub mod network;
pub mod ui_state;

// export App and related types
pub use core::{App, MessageType};
pub use session::WalletSession;
pub use eligibility::OwnershipState;
pub use mint::MintStatus;
pub use ui_state::{CustomField, Section};
