pub mod http_submitter;

pub use http_submitter::HttpInvoiceSubmitter;
