//! Pieces shared by several pages.

pub mod alert_dialog;
pub mod listing_card;
pub mod navbar;
pub mod overlays;
