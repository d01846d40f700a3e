pub mod add_line_item;
pub mod get_document;
pub mod print_invoice;
pub mod remove_line_item;
pub mod update_detail;
pub mod update_line_item;

pub use add_line_item::AddLineItemUseCase;
pub use get_document::{
  DocumentResponse, GetDocumentUseCase, InvoiceDetailsDto, LineItemDto, PartyDto,
};
pub use print_invoice::{PrintInvoiceResponse, PrintInvoiceUseCase};
pub use remove_line_item::{RemoveLineItemCommand, RemoveLineItemUseCase};
pub use update_detail::{UpdateDetailCommand, UpdateDetailUseCase};
pub use update_line_item::{UpdateLineItemCommand, UpdateLineItemUseCase};
