//! Shared components of the calculator UI. The Pico wrappers are the building
//! blocks; the rest compose them into the pieces the screens render.
pub mod action_link;
pub mod currency_select;
pub mod loading_overlay;
pub mod pico;
pub mod settings_info_card;
