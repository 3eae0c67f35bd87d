// Route handlers, one module per backend resource.
//
// Apart from auth (which owns the session lifecycle), every handler is thin
// wiring over `Backend::forward`: pick the backend path, pick the method,
// pick the fallback message. Nothing else varies between routes.

pub mod auth;
pub mod budgets;
pub mod clients;
pub mod investor_profile;
pub mod locations;
pub mod meeting_reasons;
pub mod payment_methods;
pub mod schedulings;
pub mod tasks;
pub mod transaction_categories;
pub mod transactions;
pub mod users;
pub mod wallets;
