//! Client-side share identifiers and the links built from them.
//!
//! A [`ShareId`] is cosmetic: the server never uses it to select a message.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::QR_SERVICE_URL;
use crate::error::ShareError;

pub const ADJECTIVES: [&str; 8] = [
    "swift", "bright", "calm", "bold", "clever", "wild", "cool", "wise",
];

pub const NOUNS: [&str; 8] = [
    "wave", "star", "moon", "fire", "sky", "cloud", "leaf", "wind",
];

/// `<adjective>-<noun>-<0..999>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShareId(String);

impl ShareId {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // Both lists are non-empty constants.
        let adj = ADJECTIVES.choose(rng).copied().unwrap_or(ADJECTIVES[0]);
        let noun = NOUNS.choose(rng).copied().unwrap_or(NOUNS[0]);
        let num: u16 = rng.gen_range(0..1000);
        Self(format!("{adj}-{noun}-{num}"))
    }

    pub fn parse(s: &str) -> Result<Self, ShareError> {
        let invalid = || ShareError::InvalidIdentifier(s.to_string());

        let mut parts = s.splitn(3, '-');
        let (Some(adj), Some(noun), Some(num)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if !ADJECTIVES.contains(&adj) || !NOUNS.contains(&noun) {
            return Err(invalid());
        }
        match num.parse::<u16>() {
            Ok(n) if n < 1000 && num == n.to_string() => Ok(Self(s.to_string())),
            _ => Err(invalid()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<share_base>/<id>`, e.g. `textshare.app/calm-moon-42`.
pub fn share_link(share_base: &str, id: &ShareId) -> String {
    format!("{}/{}", share_base.trim_end_matches('/'), id)
}

/// URL of a 300x300 QR image encoding `text`, rendered by a third party.
pub fn qr_code_url(text: &str) -> String {
    format!(
        "{QR_SERVICE_URL}?size=300x300&data={}&bgcolor=ffffff&color=000000&margin=20",
        urlencoding::encode(text)
    )
}
