//! UI Components
//!
//! Reusable Leptos components.

mod nav_header;
mod bucket_item_row;
mod add_item_prompt;
mod plan_editor;
mod plan_row;
mod remove_mode_button;
mod destination_row;
mod album_tab_bar;
mod album_card;

pub use nav_header::NavHeader;
pub use bucket_item_row::BucketItemRow;
pub use add_item_prompt::AddItemPrompt;
pub use plan_editor::PlanEditorModal;
pub use plan_row::PlanRow;
pub use remove_mode_button::RemoveModeButton;
pub use destination_row::DestinationRow;
pub use album_tab_bar::AlbumTabBar;
pub use album_card::AlbumCard;
