mod catalog;
mod cli;
mod export;
mod helpers;
mod planning;
