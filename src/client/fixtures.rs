//! Shared fixtures for client and display tests

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use super::models::{
    ContentEntry, ContentState, ContentType, Initiative, Institution, Language, Metrics,
    PlatformMetrics, Sdg, TripMetrics, User, UserMetrics,
};

/// Build an unsigned JWT whose payload carries the given `exp` claim.
///
/// The signature segment is garbage on purpose: expiry decoding never
/// verifies it.
pub fn jwt_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}

pub fn sample_user() -> User {
    User {
        id: "user-1".to_string(),
        username: "ada".to_string(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        gender: Some("f".to_string()),
        birthday: Some("1990-12-10".to_string()),
        verified: true,
        credits: 128.5,
        total_dist: 342.7,
        trip_count: 58,
        initiative_id: Some("init-1".to_string()),
        initiative: None,
        subject: Some("oidc|user-1".to_string()),
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_initiative() -> Initiative {
    Initiative {
        id: "init-1".to_string(),
        title: "Trees for the City".to_string(),
        description: "Plant a tree for every 100 credits".to_string(),
        goal: 5000.0,
        credits: 1250.5,
        enabled: true,
        end_date: Some("2026-12-31".to_string()),
        institution_id: Some("inst-1".to_string()),
        institution: Some(Institution {
            id: "inst-1".to_string(),
            name: "City Hall".to_string(),
            description: String::new(),
            presigned_logo_url: None,
        }),
        sponsors: Vec::new(),
        sdgs: vec![Sdg {
            code: 13,
            title: "Climate Action".to_string(),
            description: String::new(),
            image_uri: None,
        }],
        presigned_image_url: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_content() -> ContentEntry {
    ContentEntry {
        id: "content-1".to_string(),
        content_type: ContentType::News,
        state: ContentState::Pending,
        title: "Bike lanes expanded downtown".to_string(),
        subtitle: "Ten new kilometers".to_string(),
        description: "The city opened ten new kilometers of protected lanes.".to_string(),
        article_url: Some("https://news.example.com/lanes".to_string()),
        date: None,
        time: None,
        period: None,
        image_url: None,
        language_code: Some("en".to_string()),
        language: Some(Language {
            code: "en".to_string(),
            name: "English".to_string(),
            native_name: "English".to_string(),
        }),
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_metrics() -> Metrics {
    Metrics {
        platform: PlatformMetrics {
            total_initiatives: 12,
            completed_initiatives: 4,
            ongoing_initiatives: 8,
            total_credits: 90210.5,
        },
        users: UserMetrics {
            total: 350,
            average_age: 33.4,
            age_groups: Default::default(),
            gender_count: Default::default(),
        },
        trips: TripMetrics {
            total: 4200,
            average_dist: 5.8,
            average_credits: 2.3,
        },
    }
}
