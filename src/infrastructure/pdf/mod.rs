pub mod wkhtmltopdf;

pub use wkhtmltopdf::WkHtmlToPdfGenerator;
