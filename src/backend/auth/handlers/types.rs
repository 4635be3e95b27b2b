/**
 * Authentication Handler Types
 *
 * Response bodies for the register and login handlers. Request bodies live
 * in `shared::user` since clients build them too.
 */

use serde::{Deserialize, Serialize};

use crate::shared::PublicUser;

/// Returned by registration: the new user, never a token or hash
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    pub user: PublicUser,
}

/// Returned by login
///
/// The token is also set as the `token` cookie; it is repeated here for
/// clients that do not use cookies.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub msg: String,
    pub user: PublicUser,
    pub token: String,
}
