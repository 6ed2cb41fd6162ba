//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing user components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The store-assigned identifier was not a positive integer.
    InvalidId,
    /// The name was absent or blank.
    EmptyName,
    /// The email was absent or blank.
    EmptyEmail,
}

impl UserValidationError {
    /// Name of the request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
        }
    }

    /// Stable machine-readable validation code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::EmptyName => "empty_name",
            Self::EmptyEmail => "empty_email",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a positive integer"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// Identifiers are issued by the store's serial sequence when a user is
/// inserted and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::UserId;
    ///
    /// let id = UserId::new(1).expect("positive ids are valid");
    /// assert_eq!(id.get(), 1);
    /// assert!(UserId::new(0).is_err());
    /// ```
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Access the raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! required_text {
    ($(#[$meta:meta])* $name:ident, $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the value; blank input is rejected.
            pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(UserValidationError::$error);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

required_text! {
    /// Human readable user name. Not unique.
    UserName,
    EmptyName
}

required_text! {
    /// Contact email address.
    ///
    /// Only presence is checked here; format and uniqueness belong to the
    /// store schema.
    EmailAddress,
    EmptyEmail
}

/// A user that has been validated but not yet stored.
///
/// # Examples
/// ```
/// use users_api::domain::NewUser;
///
/// let user = NewUser::try_from_strings("Alice", "alice@example.com").expect("valid user");
/// assert_eq!(user.name().as_ref(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: UserName,
    email: EmailAddress,
}

impl NewUser {
    /// Build a new [`NewUser`] from validated components.
    pub fn new(name: UserName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    /// Fallible constructor validating both fields. The name is checked first.
    pub fn try_from_strings(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        Ok(Self::new(name, email))
    }

    /// Name to store.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email to store.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Attach a store-assigned identifier, producing the persisted [`User`].
    pub fn into_user(self, id: UserId) -> User {
        let Self { name, email } = self;
        User::new(id, name, email)
    }
}

/// Application user as persisted by the store.
///
/// ## Invariants
/// - `id` is a positive integer assigned once by the store.
/// - `name` and `email` are non-empty once trimmed of whitespace.
///
/// Serialises as `{"id": 1, "name": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, name: UserName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Fallible constructor enforcing all field invariants.
    ///
    /// Prefer [`User::new`] when components are already validated.
    pub fn try_from_parts(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        Ok(Self::new(id, name, email))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// User name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: i32,
    name: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.name, value.email)
    }
}
