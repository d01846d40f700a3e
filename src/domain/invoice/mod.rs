pub mod document;
pub mod edits;
pub mod errors;
pub mod format;
pub mod ports;
pub mod totals;
pub mod value_objects;

pub use document::{InvoiceDetails, InvoiceDocument, LineItem, PartyInfo};
pub use edits::{DetailTarget, DetailsField, Edit, ItemField, PartyField, PartySection};
pub use errors::InvoiceError;
pub use format::{format_currency, format_currency_code};
pub use ports::{DocumentStore, InvoiceSubmitter, PdfGenerator};
pub use totals::InvoiceTotals;
pub use value_objects::{Currency, ValueObjectError, parse_decimal_or_zero};
