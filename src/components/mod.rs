//! UI Components
//!
//! Leptos components for the PackPal page.

mod about_section;
mod add_item_modal;
mod category_panel;
mod checklist_section;
mod confirm_button;
mod contact_section;
mod footer;
mod hero_section;
mod item_card;
mod launch_modal;
mod leaderboard;
mod login_modal;
mod modal;
mod navbar;
mod scroll_progress;
mod theme_toggle;
mod tips_carousel;
mod travel_tips;
mod trip_type_selector;

pub use about_section::AboutSection;
pub use add_item_modal::AddItemModal;
pub use category_panel::CategoryPanel;
pub use checklist_section::ChecklistSection;
pub use confirm_button::ConfirmButton;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use item_card::ItemCard;
pub use launch_modal::LaunchModal;
pub use leaderboard::Leaderboard;
pub use login_modal::LoginModal;
pub use modal::Modal;
pub use navbar::{Navbar, NAV_LINKS};
pub use scroll_progress::ScrollProgress;
pub use theme_toggle::{SoundToggle, ThemeToggle};
pub use tips_carousel::TipsCarousel;
pub use travel_tips::TravelTips;
pub use trip_type_selector::TripTypeSelector;
