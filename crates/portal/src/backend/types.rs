//! Wire types for the course backend's JSON API.
//!
//! Field names follow the backend exactly (a mix of camelCase and
//! lowercase). Response types are lenient: missing fields default, and
//! string-ish fields accept numbers, because the backend is not consistent
//! about either.

use serde::{Deserialize, Deserializer, Serialize};

use sankalp_core::{ApprovalStatus, CourseId, MaterialId, ModuleId, Price, RegistrationId, UserId};

/// Accept a JSON string, number, or null as a `String`.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
        Float(f64),
        Missing(()),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(text) => text,
        Repr::Int(value) => value.to_string(),
        Repr::Float(value) => value.to_string(),
        Repr::Missing(()) => String::new(),
    })
}

/// Like [`lenient_string`], but blank values become `None`.
fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = lenient_string(deserializer)?;
    Ok(if value.trim().is_empty() { None } else { Some(value) })
}

/// Accept a JSON number or numeric string as a day index.
fn lenient_day<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = lenient_string(deserializer)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(serde::de::Error::custom)
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Accounts
// =============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// User record returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendUser {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: BackendUser,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, rename = "userId")]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest<'a> {
    #[serde(rename = "originalEmail")]
    pub original_email: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

// =============================================================================
// Catalog
// =============================================================================

/// A course as listed by `GET /api/courses`.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default, alias = "thumbnail", deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

impl Course {
    /// Description cut to `max` characters with an ellipsis, for course cards.
    #[must_use]
    pub fn summary(&self, max: usize) -> String {
        if self.description.chars().count() > max {
            let cut: String = self.description.chars().take(max).collect();
            format!("{cut}...")
        } else {
            self.description.clone()
        }
    }

    /// First letter of the title, shown when the course has no image.
    #[must_use]
    pub fn initial(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }
}

/// A module of a course, from `GET /api/course-modules/:courseId`.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    #[serde(default, rename = "courseId", alias = "course_id")]
    pub course_id: Option<CourseId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_day")]
    pub day: u32,
    #[serde(
        default,
        rename = "videoUrl",
        alias = "video_url",
        deserialize_with = "lenient_opt_string"
    )]
    pub video_url: Option<String>,
}

/// A material row from `GET /api/module-materials/:courseId`.
#[derive(Debug, Clone, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub id: Option<MaterialId>,
    #[serde(rename = "moduleId", alias = "module_id")]
    pub module_id: ModuleId,
    #[serde(default, rename = "courseId", alias = "course_id")]
    pub course_id: Option<CourseId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub material: String,
}

/// Payload for `POST /api/courses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub modules: Vec<NewModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewModule {
    pub title: String,
    pub day: u32,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub materials: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedCourse {
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

// =============================================================================
// Registrations
// =============================================================================

/// Payload for `POST /api/pending`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub transid: &'a str,
    #[serde(rename = "courseName")]
    pub course_name: &'a str,
    pub amt: Price,
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

/// Body shared by the two registration status checks.
#[derive(Debug, Serialize)]
pub struct CourseStatusRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

#[derive(Debug, Default, Deserialize)]
pub struct PendingCheckResponse {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl PendingCheckResponse {
    /// The numeric flag, if the backend sent an integer.
    ///
    /// Strings such as `"1"` are not coerced.
    #[must_use]
    pub fn flag(&self) -> Option<i64> {
        self.value.as_ref().and_then(serde_json::Value::as_i64)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseAccessResponse {
    #[serde(default, rename = "hasAccess")]
    pub has_access: bool,
}

/// A submitted payment awaiting (or past) admin review.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingRegistration {
    pub id: RegistrationId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub transactionid: String,
    #[serde(default, rename = "courseName", deserialize_with = "lenient_string")]
    pub course_name: String,
    #[serde(default)]
    pub amount: Price,
    #[serde(default, rename = "courseId")]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminCheckResponse {
    #[serde(default)]
    pub data: Vec<PendingRegistration>,
}

#[derive(Debug, Serialize)]
pub struct ApproveRequest<'a> {
    pub value: i64,
    pub email: &'a str,
}

// =============================================================================
// Video access
// =============================================================================

#[derive(Debug, Serialize)]
pub struct VideoTokenRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "moduleId")]
    pub module_id: ModuleId,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoTokenResponse {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub token: Option<String>,
}
