// src/events/names.rs
//
// Well-known event names crossing the UI boundary. Any string is a legal
// event name; these are just the vocabulary the shipped screens rely on.

pub const RETURN_TO_TOP_AND_REFRESH: &str = "return-to-top-and-refresh";
pub const FOCUS_SEARCH_INPUT: &str = "focus-search-input";
pub const SESSION_ENDED: &str = "session-ended";
pub const SESSION_CHANGED: &str = "session-changed";
pub const FAVORITES_CHANGED: &str = "favorites-changed";
pub const THEME_CHANGED: &str = "theme-changed";
