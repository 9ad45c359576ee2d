//! HTML renderer for parsed portfolio records
//!
//! This module takes a Record and a Theme and produces a self-contained
//! HTML document whose colors come from CSS custom properties.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{escape_html, export_filename, render_html, render_html_with_config};
