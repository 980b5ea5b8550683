pub mod auth;
pub mod availability;
pub mod booking_request;
pub mod catalog;
pub mod client;
pub mod health;
pub mod payment;
pub mod reservation;
pub mod service;
pub mod space;
pub mod user;
