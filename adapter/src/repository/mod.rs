pub mod auth;
pub mod availability;
pub mod booking_request;
pub mod client;
pub mod health;
mod password;
pub mod payment;
pub mod reservation;
pub mod service;
pub mod space;
pub mod user;
