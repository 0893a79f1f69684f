pub mod form_page;
