//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppShell;
use crate::pages::{Browse, Landing};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Landing {},

        #[route("/app")]
        Browse {},
}
