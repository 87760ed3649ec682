pub mod list_dietary_filters;
