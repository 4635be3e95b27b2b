//! Content Routes
//!
//! Read-only routes outside the auth flow:
//!
//! - **`dashboard`** - GET /api/dashboard (behind the auth guard)
//! - **`users`** - GET /api/users
//! - **`jokes`** - GET /api/jokes and the GET / liveness text

pub mod dashboard;
pub mod jokes;
pub mod users;

pub use dashboard::dashboard;
pub use jokes::{list_jokes, root};
pub use users::list_users;
