//! Link-registration backends.
//!
//! | Backend | Target |
//! |---|---|
//! | [`ScriptHost`] | Acrobat JavaScript console batch (the original workflow) |
//! | [`PdfHost`] | Real `/Link` annotations written with `lopdf` |
//!
//! Both implement [`NavigationHost`](crate::annotate::NavigationHost) and
//! never compute geometry themselves; rectangles arrive ready-made from
//! [`annotate_all`](crate::annotate::annotate_all).

pub mod pdf;
pub mod script;

pub use pdf::PdfHost;
pub use script::ScriptHost;
