//! Core user domain types.

use serde::{Deserialize, Serialize};

/// The name and email of the app's single user.
///
/// The default value, with empty strings, is used when no details have been
/// recorded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's name, e.g. "Gary Gopher".
    pub name: String,
    /// The user's email address.
    pub email: String,
}

/// Form data for updating the user's details.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDetailsForm {
    pub name: String,
    pub email: String,
}
