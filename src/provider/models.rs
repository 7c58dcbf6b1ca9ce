//! Data models representing user records returned by the provider.
//!
//! This module contains domain models for the random-user listing. Types
//! prefixed with `Api` are internal deserialisation targets that convert into
//! public domain types. The provider wraps its payload twice: the HTTP body is
//! an envelope whose `data` field holds page metadata, and the user array
//! lives in the payload's own `data` field.

use serde::Deserialize;

use super::pagination::PageInfo;

#[cfg(feature = "test-support")]
pub mod test_support;

/// One externally sourced user profile displayed as a table row.
///
/// All fields except `id` are optional because the provider occasionally
/// omits them; display code substitutes placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    /// Opaque unique identifier.
    pub id: u64,
    /// Honorific title (e.g. "Ms").
    pub title: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// City of residence.
    pub city: Option<String>,
    /// State or region of residence.
    pub state: Option<String>,
    /// Country of residence.
    pub country: Option<String>,
    /// Thumbnail avatar URL.
    pub avatar_url: Option<String>,
    /// Login username.
    pub username: Option<String>,
}

impl UserRecord {
    /// Composes the display name from title, first, and last name.
    ///
    /// Missing components are skipped; an entirely unnamed record renders
    /// as an empty string.
    #[must_use]
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [
            self.title.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        parts.join(" ")
    }

    /// Composes the location string as "city, state, country".
    ///
    /// Missing components are skipped.
    #[must_use]
    pub fn location(&self) -> String {
        let parts: Vec<&str> = [
            self.city.as_deref(),
            self.state.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        parts.join(", ")
    }
}

/// One page of user records together with the provider's page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPage {
    /// Records on this page, in provider order.
    pub records: Vec<UserRecord>,
    /// Position metadata reported by the provider.
    pub info: PageInfo,
}

/// Top-level response envelope from the provider.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiEnvelope {
    pub(super) data: Option<ApiPayload>,
}

/// Inner payload carrying the user array and page metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiPayload {
    pub(super) data: Option<Vec<ApiUser>>,
    pub(super) total_pages: Option<u32>,
    pub(super) previous_page: Option<bool>,
    pub(super) next_page: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) id: Option<u64>,
    pub(super) name: Option<ApiName>,
    pub(super) email: Option<String>,
    pub(super) phone: Option<String>,
    pub(super) location: Option<ApiLocation>,
    pub(super) picture: Option<ApiPicture>,
    pub(super) login: Option<ApiLogin>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiName {
    pub(super) title: Option<String>,
    pub(super) first: Option<String>,
    pub(super) last: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLocation {
    pub(super) city: Option<String>,
    pub(super) state: Option<String>,
    pub(super) country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPicture {
    pub(super) thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLogin {
    pub(super) username: Option<String>,
}

impl From<ApiUser> for UserRecord {
    fn from(api: ApiUser) -> Self {
        let name = api.name.unwrap_or(ApiName {
            title: None,
            first: None,
            last: None,
        });
        let location = api.location.unwrap_or(ApiLocation {
            city: None,
            state: None,
            country: None,
        });
        Self {
            id: api.id.unwrap_or_default(),
            title: name.title,
            first_name: name.first,
            last_name: name.last,
            email: api.email,
            phone: api.phone,
            city: location.city,
            state: location.state,
            country: location.country,
            avatar_url: api.picture.and_then(|picture| picture.thumbnail),
            username: api.login.and_then(|login| login.username),
        }
    }
}

impl ApiEnvelope {
    /// Converts the envelope into a domain page.
    ///
    /// The provider echoes page position in the payload; `requested_page`
    /// and `per_page` fill the gaps when the payload omits it.
    pub(super) fn into_user_page(self, requested_page: u32, per_page: u8) -> UserPage {
        let Some(payload) = self.data else {
            return UserPage {
                records: Vec::new(),
                info: PageInfo::new(requested_page, per_page),
            };
        };

        let info = PageInfo::new(requested_page, per_page)
            .with_total_pages(payload.total_pages)
            .with_has_next(payload.next_page.unwrap_or_default())
            .with_has_prev(payload.previous_page.unwrap_or_default());

        let records = payload
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        UserPage { records, info }
    }
}
