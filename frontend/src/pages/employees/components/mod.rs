pub mod filter;
pub mod form_modal;
pub mod list;
