pub mod counter;
pub mod icon;
pub mod modal;
pub mod navbar;
pub mod reveal;

pub use counter::AnimatedCounter;
pub use icon::Icon;
pub use modal::Modal;
pub use navbar::Navbar;
pub use reveal::use_reveal;
