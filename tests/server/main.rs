mod api;
mod helpers;
