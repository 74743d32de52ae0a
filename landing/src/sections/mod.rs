// Landing page sections

mod console_banner;
mod contact;
mod features;
mod footer;
mod hero;
mod problem;
mod reveal;
mod theme_toggle;
mod toaster;
mod why_choose;

pub use console_banner::ConsoleBanner;
pub use contact::ContactSection;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use problem::ProblemSolution;
pub use reveal::Reveal;
pub use theme_toggle::ThemeToggle;
pub use toaster::Toaster;
pub use why_choose::WhyChoose;
