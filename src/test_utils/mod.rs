#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod stub_api;

pub(crate) use form::{
    assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_select_options,
    must_get_form,
};
pub(crate) use html::{
    assert_valid_html, count_elements, element_text, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{assert_content_type, assert_status_ok, get_header};
pub(crate) use stub_api::{
    ApiCall, Failures, StubFinanceApi, count_calls, populated_api, sample_accounts,
    sample_categories, sample_expenses, sample_summary, sample_transactions,
};
