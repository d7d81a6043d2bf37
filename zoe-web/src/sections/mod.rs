//! Landing page sections, in page order.

pub mod about;
pub mod contact;
pub mod faq;
pub mod features;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod how_it_works;
pub mod stats;
pub mod team;

pub use about::About;
pub use contact::Contact;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use stats::Stats;
pub use team::Team;
