//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{Layout, LeadsTab, WebcheckTab};

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    LeadsTab {},
    #[route("/webcheck")]
    WebcheckTab {},
}
