//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain: `form` owns the reusable per-form
//! container, `auth` owns the login/register field records and their
//! transitions, `ui` owns page chrome such as the active tab. The two
//! auth forms are independent `FormState` values with no shared data.

pub mod auth;
pub mod form;
pub mod ui;
