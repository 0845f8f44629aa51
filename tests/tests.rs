mod gateway;
mod listing;
mod repository;
