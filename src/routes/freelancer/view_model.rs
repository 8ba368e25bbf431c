use crate::services::freelancer_api::{DisplayValue, FreelancerProfile, Review, WorkItem};

pub const DEFAULT_PHOTO_URL: &str = "/ProfileImages/default-profile.jpg";
pub const NO_RATING: &str = "No rating";
pub const NO_COUNTRY: &str = "Location not available";
pub const NO_BIO: &str = "No bio available";

/// Render-ready profile with every fallback already applied
///
/// Built once per successful fetch. The page components only ever read
/// these fields and never look at the wire types.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileViewModel {
    pub name: String,
    pub photo_url: String,
    pub rating: String,
    pub occupation: Vec<String>,
    pub country: String,
    pub languages: Vec<String>,
    pub bio: String,
    pub skills: Vec<String>,
    pub work: Vec<WorkCard>,
    pub reviews: Vec<ReviewCard>,
    /// `None` disables the contact action
    pub contact_user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkCard {
    /// List-diffing key: position, then the backend key when there is one
    pub key: String,
    pub image_url: String,
    pub description: String,
    pub rating: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub key: String,
    pub reviewer: String,
    pub avatar_url: String,
    pub message: String,
    pub rating: String,
}

/// `None` for absent or whitespace-only text
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    present(value).unwrap_or_else(|| fallback.to_string())
}

fn display_or(value: Option<DisplayValue>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_blank())
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Optional value shown without a placeholder (list items render blanks as-is)
fn display_plain(value: Option<DisplayValue>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Backend keys are not unique (`1` and `"1"` collide), so the position leads
fn item_key(key: Option<DisplayValue>, index: usize) -> String {
    match key.filter(|k| !matches!(k, DisplayValue::Text(s) if s.trim().is_empty())) {
        Some(k) => format!("{}-{}", index, k),
        None => index.to_string(),
    }
}

impl WorkCard {
    fn from_item(item: WorkItem, index: usize) -> Self {
        Self {
            key: item_key(item.key, index),
            image_url: item.project_images.unwrap_or_default(),
            description: item.project_description.unwrap_or_default(),
            rating: display_plain(item.project_rating),
            price: display_plain(item.price),
        }
    }
}

impl ReviewCard {
    fn from_review(review: Review, index: usize) -> Self {
        Self {
            key: item_key(review.key, index),
            reviewer: review.name.unwrap_or_default(),
            avatar_url: review.profile_image.unwrap_or_default(),
            message: review.msg.unwrap_or_default(),
            rating: display_plain(review.rating),
        }
    }
}

impl From<FreelancerProfile> for ProfileViewModel {
    fn from(profile: FreelancerProfile) -> Self {
        Self {
            name: profile.name.unwrap_or_default(),
            photo_url: text_or(profile.photo_url, DEFAULT_PHOTO_URL),
            rating: display_or(profile.rating, NO_RATING),
            occupation: profile.occupation.unwrap_or_default(),
            country: text_or(profile.country, NO_COUNTRY),
            languages: profile.languages.unwrap_or_default(),
            bio: text_or(profile.bio, NO_BIO),
            skills: profile.skills.unwrap_or_default(),
            work: profile
                .work
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(i, item)| WorkCard::from_item(item, i))
                .collect(),
            reviews: profile
                .reviews
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(i, review)| ReviewCard::from_review(review, i))
                .collect(),
            contact_user_id: present(profile.user_id),
        }
    }
}

impl ProfileViewModel {
    pub fn can_contact(&self) -> bool {
        self.contact_user_id.is_some()
    }
}
