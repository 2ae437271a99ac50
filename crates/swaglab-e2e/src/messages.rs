//! Validation and confirmation messages rendered by the application.
//!
//! The application under test produces deterministic messages; any
//! deviation is a test failure, not a suite bug.

/// Banner for credentials that match no account
pub const LOGIN_INVALID: &str =
    "Epic sadface: Username and password do not match any user in this service";

/// Banner for a blank username
pub const LOGIN_USERNAME_REQUIRED: &str = "Epic sadface: Username is required";

/// Banner for a blank password
pub const LOGIN_PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";

/// Checkout banner for a blank first name
pub const FIRST_NAME_REQUIRED: &str = "Error: First Name is required";

/// Checkout banner for a blank last name
pub const LAST_NAME_REQUIRED: &str = "Error: Last Name is required";

/// Checkout banner for a blank postal code
pub const POSTAL_CODE_REQUIRED: &str = "Error: Postal Code is required";

/// Header on the order completion screen
pub const ORDER_COMPLETE: &str = "Thank you for your order!";
