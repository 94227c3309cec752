pub mod capture;
pub mod clear;
pub mod export;
pub mod show;
