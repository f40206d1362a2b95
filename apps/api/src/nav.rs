//! Navigation gate — decides which page actually renders for a requested
//! destination, given the current profile.
//!
//! Pure and side-effect free: the same (requested, profile) pair always
//! resolves to the same page.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

/// The navigable pages. Wire names match the frontend route tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Dashboard,
    #[serde(rename = "jobs")]
    JobSearch,
    #[serde(rename = "cv")]
    CvTailor,
    #[serde(rename = "interview")]
    InterviewCoach,
    Profile,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Dashboard,
        Page::JobSearch,
        Page::CvTailor,
        Page::InterviewCoach,
        Page::Profile,
    ];
}

/// Resolves a requested page against the profile-completion gate.
///
/// Home and Profile are always reachable. Every other page requires a
/// complete profile and redirects to Profile until one exists.
pub fn resolve(requested: Page, profile: &UserProfile) -> Page {
    match requested {
        Page::Home | Page::Profile => requested,
        Page::Dashboard | Page::JobSearch | Page::CvTailor | Page::InterviewCoach => {
            if profile.is_complete() {
                requested
            } else {
                Page::Profile
            }
        }
    }
}
