mod data;
mod filter;
mod forms;
mod map;
mod selection;
mod theme;
