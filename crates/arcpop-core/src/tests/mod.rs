mod attributes;
mod popup;
