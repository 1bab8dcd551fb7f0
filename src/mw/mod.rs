pub mod headers_mw;
pub mod request_mw;
