//! User request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{MAX_LOGIN_NAME_LENGTH, MAX_PERSON_NAME_LENGTH, MIN_LOGIN_NAME_LENGTH},
    utils::LOGIN_NAME_REGEX,
};

/// Wire representation of a user, used for request and response bodies.
///
/// `id` is absent when creating a user. Optional attributes that are `None`
/// are left out of serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(
        length(min = MIN_LOGIN_NAME_LENGTH, max = MAX_LOGIN_NAME_LENGTH),
        regex(path = *LOGIN_NAME_REGEX, message = "must contain only letters, digits and underscores")
    )]
    pub login_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: Option<String>,
}

/// Query parameters of the login name filter
#[derive(Debug, Deserialize)]
pub struct FilterUsersQuery {
    pub login_name: String,
}
