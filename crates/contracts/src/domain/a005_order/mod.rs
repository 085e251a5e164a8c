//! Order form state engine.
//!
//! - `aggregate`: wire types of the `/orders` endpoints
//! - `catalog`: reference lists backing the form's selectors
//! - `stock`: per-region stock ceilings of the selected requester
//! - `draft`: the in-memory draft and its row editor
//! - `validator`: submit-time rules
//! - `submission`: payload shaping and create/update targeting
//! - `form`: the session state tying everything together

pub mod aggregate;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod form;
pub mod notice;
pub mod stock;
pub mod submission;
pub mod validator;

pub use aggregate::{Order, OrderId, OrderLine, OrderPayload, OrderStatus, OrderType};
pub use catalog::Catalog;
pub use draft::{OrderDraft, OrderRow, Quantity, RequesterChange};
pub use error::{OrderFormError, ParseError, StockError};
pub use form::OrderForm;
pub use notice::{Notice, NoticeKind};
pub use stock::{resolve_ceilings, StockCeilingMap};
pub use submission::{SubmitMethod, SubmitTarget};
pub use validator::{validate, ValidatedLine, ValidatedOrder};
