//! Contact and social link extraction
//!
//! Each extractor is a pure function over free-form channel description text
//! returning the first match, rebuilt into a canonical form. Matching is by
//! pattern shape only; nothing is verified against the target service.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z0-9_]+").expect("valid email pattern")
});

// A bare `@handle` must start a token so e-mail addresses are not read as
// Instagram handles.
static INSTAGRAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)instagram\.com/@?(?P<url>[A-Za-z0-9_.]+)|(?:^|[^A-Za-z0-9_.@])@(?P<bare>[A-Za-z0-9_.]+)",
    )
    .expect("valid instagram pattern")
});

static TIKTOK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tiktok\.com/@?([A-Za-z0-9_.]+)").expect("valid tiktok pattern")
});

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9_\-]+)").expect("valid linkedin pattern")
});

/// First e-mail-shaped substring
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First Instagram handle as `https://instagram.com/{handle}`
pub fn extract_instagram(text: &str) -> Option<String> {
    let cap = INSTAGRAM_RE
        .captures_iter(text)
        .find(|cap| cap.name("url").is_some() || !follows_other_site(text, cap))?;
    let handle = cap.name("url").or_else(|| cap.name("bare"))?.as_str();

    trim_handle(handle).map(|h| format!("https://instagram.com/{}", h))
}

/// Whether a bare `@handle` is the path of another site's URL,
/// e.g. `tiktok.com/@x` or `youtube.com/@x`
fn follows_other_site(text: &str, cap: &Captures<'_>) -> bool {
    let Some(handle) = cap.name("bare") else {
        return false;
    };
    // the `@` is the byte just before the handle
    let before = &text[..handle.start() - 1];
    let token = before.rsplit(char::is_whitespace).next().unwrap_or_default();

    token.ends_with('/') && token.contains('.')
}

/// First TikTok handle as `https://tiktok.com/@{handle}`
pub fn extract_tiktok(text: &str) -> Option<String> {
    let cap = TIKTOK_RE.captures(text)?;
    trim_handle(&cap[1]).map(|h| format!("https://tiktok.com/@{}", h))
}

/// First LinkedIn profile as `https://linkedin.com/in/{slug}`
pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN_RE
        .captures(text)
        .map(|cap| format!("https://linkedin.com/in/{}", &cap[1]))
}

/// Handle without trailing sentence punctuation; `None` if nothing is left
fn trim_handle(handle: &str) -> Option<&str> {
    Some(handle.trim_end_matches('.')).filter(|h| !h.is_empty())
}

/// Contact fields pulled from one channel description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub instagram: String,
    pub tiktok: String,
    pub linkedin: String,
}

impl ContactInfo {
    /// Run every extractor independently; misses become empty strings
    pub fn from_description(description: &str) -> Self {
        Self {
            email: extract_email(description).unwrap_or_default(),
            instagram: extract_instagram(description).unwrap_or_default(),
            tiktok: extract_tiktok(description).unwrap_or_default(),
            linkedin: extract_linkedin(description).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && self.instagram.is_empty()
            && self.tiktok.is_empty()
            && self.linkedin.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(
            extract_email("contact me at jane@brand.co for collabs").as_deref(),
            Some("jane@brand.co")
        );
        assert_eq!(
            extract_email("Business: team.cook-lab@mail.example.com.").as_deref(),
            Some("team.cook-lab@mail.example.com")
        );
        assert_eq!(extract_email("no address here @ all"), None);
    }

    #[test]
    fn test_email_first_match_only() {
        let text = "first@one.com and second@two.com";
        assert_eq!(extract_email(text).as_deref(), Some("first@one.com"));
    }

    #[test]
    fn test_instagram_url() {
        assert_eq!(
            extract_instagram("instagram.com/janedoe123").as_deref(),
            Some("https://instagram.com/janedoe123")
        );
        assert_eq!(
            extract_instagram("IG: https://www.Instagram.com/cook.lab_/").as_deref(),
            Some("https://instagram.com/cook.lab_")
        );
        assert_eq!(
            extract_instagram("Insta: instagram.com/@jane_doe").as_deref(),
            Some("https://instagram.com/jane_doe")
        );
    }

    #[test]
    fn test_instagram_bare_handle() {
        assert_eq!(
            extract_instagram("@jane_doe on everything").as_deref(),
            Some("https://instagram.com/jane_doe")
        );
        assert_eq!(
            extract_instagram("Follow me (@fitwithsam).").as_deref(),
            Some("https://instagram.com/fitwithsam")
        );
        assert_eq!(
            extract_instagram("follow @jane.").as_deref(),
            Some("https://instagram.com/jane")
        );
        assert_eq!(
            extract_instagram("IG/@jane_doe").as_deref(),
            Some("https://instagram.com/jane_doe")
        );
    }

    #[test]
    fn test_only_first_match_used() {
        assert_eq!(extract_instagram("@... then @real"), None);
        assert_eq!(extract_tiktok("tiktok.com/@... or tiktok.com/@real"), None);
        assert_eq!(
            extract_instagram("@first and @second").as_deref(),
            Some("https://instagram.com/first")
        );
    }

    #[test]
    fn test_instagram_ignores_emails_and_tiktok() {
        assert_eq!(extract_instagram("mail jane@brand.co"), None);
        assert_eq!(extract_instagram("tiktok.com/@dancer"), None);
        assert_eq!(extract_instagram("https://www.youtube.com/@chesscoach"), None);
        assert_eq!(
            extract_instagram("mail jane@brand.co or DM @janeofficial").as_deref(),
            Some("https://instagram.com/janeofficial")
        );
    }

    #[test]
    fn test_tiktok() {
        assert_eq!(
            extract_tiktok("TikTok: https://www.tiktok.com/@dance.daily").as_deref(),
            Some("https://tiktok.com/@dance.daily")
        );
        assert_eq!(
            extract_tiktok("TIKTOK.COM/chef_max").as_deref(),
            Some("https://tiktok.com/@chef_max")
        );
        assert_eq!(extract_tiktok("tiktok is fun"), None);
    }

    #[test]
    fn test_linkedin() {
        assert_eq!(
            extract_linkedin("https://www.linkedin.com/in/jane-doe-42/").as_deref(),
            Some("https://linkedin.com/in/jane-doe-42")
        );
        assert_eq!(extract_linkedin("linkedin.com/company/acme"), None);
    }

    #[test]
    fn test_no_patterns() {
        let info = ContactInfo::from_description("Weekly recipes and kitchen tips.");
        assert!(info.is_empty());
        assert_eq!(info, ContactInfo::default());
    }

    #[test]
    fn test_independent_extraction() {
        let description = "Business: hello@cooklab.tv\n\
            Insta: instagram.com/cooklab\n\
            TikTok: tiktok.com/@cooklab.tv\n\
            LinkedIn: linkedin.com/in/max-cook";
        let info = ContactInfo::from_description(description);

        assert_eq!(info.email, "hello@cooklab.tv");
        assert_eq!(info.instagram, "https://instagram.com/cooklab");
        assert_eq!(info.tiktok, "https://tiktok.com/@cooklab.tv");
        assert_eq!(info.linkedin, "https://linkedin.com/in/max-cook");
    }
}
