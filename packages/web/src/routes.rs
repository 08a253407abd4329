//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{NotFound, SearchPage};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    SearchPage {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
