pub mod article;
pub mod card;
pub mod config;
pub mod dom;
pub mod fetcher;
pub mod i18n;
pub mod page;
