pub mod approval;
pub mod assistant;
pub mod booking;
pub mod calculator;
pub mod config;
pub mod conflict;
pub mod listing;
pub mod notify;
pub mod validator;
