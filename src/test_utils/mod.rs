#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::{assert_content_type, assert_status, parse_json};
pub(crate) use state::get_test_app_state;
