//! Conversion between [`UserDto`] and the [`User`] domain model

use crate::models::User;

use super::request::UserDto;

/// Lossless two-way mapping between wire and domain users
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDtoMapper;

impl UserDtoMapper {
    pub fn to_domain(&self, dto: UserDto) -> User {
        dto.into()
    }

    pub fn from_domain(&self, user: User) -> UserDto {
        user.into()
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            login_name: dto.login_name,
            email_address: dto.email_address,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login_name: user.login_name,
            email_address: user.email_address,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_round_trip() {
        let mapper = UserDtoMapper;
        let dto = UserDto {
            id: Some(7),
            login_name: "alice".to_string(),
            email_address: Some("alice@example.com".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        };

        assert_eq!(mapper.from_domain(mapper.to_domain(dto.clone())), dto);
    }

    #[test]
    fn test_domain_round_trip() {
        let mapper = UserDtoMapper;
        let user = User::new("bob").with_name("Bob", "Builder");

        assert_eq!(mapper.to_domain(mapper.from_domain(user.clone())), user);
    }
}
