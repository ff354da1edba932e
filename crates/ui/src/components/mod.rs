//! UI Components

mod app;
mod lead_card;
mod leads_tab;
mod toast_host;
mod webcheck_tab;

pub use app::{App, Layout};
pub use lead_card::LeadCard;
pub use leads_tab::LeadsTab;
pub use toast_host::ToastHost;
pub use webcheck_tab::WebcheckTab;
