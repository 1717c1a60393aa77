//! Inventory panel for the game client.
//!
//! The panel itself lives in [`inventory`]; it draws through the widget
//! traits in [`ui`] and reads items through the contracts in [`grid`].
//! [`headless`] provides in-memory implementations of all of them.

pub mod error;
pub mod grid;
pub mod headless;
pub mod inventory;
pub mod settings;
pub mod ui;

pub use error::{PanelError, Result};
pub use inventory::provisioning::{ProvisionReport, TestLoadout};
pub use inventory::InventoryPanel;
pub use settings::PanelSettings;
