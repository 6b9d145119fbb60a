//! Application facade.
//!
//! Everything a dashboard front end calls: startup wiring and seeding, raw
//! form handling, the contact-form rules, and telemetry initialization.
//! Rendering, navigation, and the position device stay on the other side
//! of this boundary.

pub mod advisory;
pub mod contact;
pub mod forms;
pub mod seed;
pub mod session;
pub mod telemetry;

pub use advisory::{locate_supplier, supplier_search_url};
pub use contact::{ContactForm, validate_contact_form};
pub use forms::{FormOutcome, ItemForm, submit_item_form};
pub use session::{bootstrap, open_dashboard};
