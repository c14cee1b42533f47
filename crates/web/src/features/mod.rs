pub mod activities;
pub mod admin;
pub mod auth;
pub mod entries;
pub mod live;
pub mod records;
pub mod standings;
