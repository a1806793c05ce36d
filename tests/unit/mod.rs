mod access;
mod config;
mod employee;
mod pairing;
mod project;
mod task;
mod workplace;
