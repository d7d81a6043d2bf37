//! Marketing Landing Page

use leptos::prelude::*;

use crate::components::Navbar;
use crate::sections::{
    About, Contact, Faq, Features, Footer, Gallery, Hero, HowItWorks, Stats, Team,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Stats/>
                <Features/>
                <HowItWorks/>
                <Gallery/>
                <Team/>
                <Faq/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
