pub mod entry_list;
pub mod help_popup;
pub mod login_view;
pub mod reader_view;
pub mod search_view;
pub mod status_bar;
pub mod video_link;
