use serde::{Deserialize, Serialize};

use super::{object_type::TYPE_USER, ExplicitContent, ExternalUrls, Followers, Image};
use crate::{
    error::{Error, Result},
    validate::{Validate, ValidationMode},
};

/// Publicly available information about a user.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicUser {
    pub display_name: Option<String>,
    pub external_urls: ExternalUrls,
    pub followers: Followers,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub uri: String,
}

/// The current user's profile, including the information only they can see.
///
/// `country`, `email`, `product` and `explicit_content` are only filled in if the token has the matching
/// `user-read-private` or `user-read-email` scopes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub user: PublicUser,
    pub country: String,
    pub email: String,
    pub explicit_content: ExplicitContent,
    pub product: String,
}

impl Validate for PublicUser {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.external_urls.validate(mode)?;
        self.followers.validate(mode)?;
        self.images.validate(mode)?;

        if self.item_type != TYPE_USER {
            return Err(Error::validation(
                "PublicUser",
                "type",
                format!("expected '{TYPE_USER}', got '{}'", self.item_type),
            ));
        }

        Ok(())
    }
}

impl Validate for PrivateUser {
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.user.validate(mode)
    }
}
