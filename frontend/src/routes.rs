use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::recommender_page::RecommenderPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    RecommenderPage {},
}
