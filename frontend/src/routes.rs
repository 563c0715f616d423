use dioxus::prelude::*;

use common::tours_query::TourType;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::top_excursions_page::TopExcursionsPage;
use crate::pages::tours_page::ToursPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/top-excursions?:search")]
    TopExcursionsPage { search: String },


    #[route("/tours/:tour_type")]
    ToursPage { tour_type: TourType },

}

impl Route {
    pub fn top_excursions(search: &str) -> Self {
        Self::TopExcursionsPage { search: search.trim().to_string() }
    }
}
