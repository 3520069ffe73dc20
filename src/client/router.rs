use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, PayoutTool},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/payout")]
    PayoutTool {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
