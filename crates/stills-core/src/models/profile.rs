//! Profile model for the carousel

use serde::{Deserialize, Serialize};

const DEMO_IMAGE_URL: &str =
    "https://github.com/kkchow333/port/blob/main/esther%20profile.jpeg?raw=true";

/// A person a reminder can be pinned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

/// Demo profiles shown in the carousel.
#[must_use]
pub fn mock_profiles() -> Vec<ProfileInfo> {
    (1..=6)
        .map(|id| ProfileInfo {
            id,
            name: format!("Esther {id}"),
            image_url: DEMO_IMAGE_URL.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_profiles_have_unique_ids() {
        let profiles = mock_profiles();
        assert_eq!(profiles.len(), 6);
        assert_eq!(profiles[0].name, "Esther 1");
        assert_eq!(profiles[5].id, 6);
        assert!(profiles
            .iter()
            .all(|profile| crate::util::is_http_url(&profile.image_url)));
    }
}
