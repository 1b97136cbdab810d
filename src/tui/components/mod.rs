// Components module - reusable UI building blocks
//
// Shell components are rendered on every page:
// - Nav bar: brand, nav items, active highlight, menu toggle
// - Status bar: footer text and key hints
// - Background: decorative particle field
//
// Overlays:
// - Mobile menu, toast
//
// Each component is a focused, single-responsibility module.

pub mod background;
pub mod mobile_menu;
pub mod nav_bar;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use nav_bar::render as render_nav;
pub use status_bar::render as render_status;
