use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Document title.
    pub title: String,
    pub greeting: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub contact_blurb: String,
    pub phone: String,
    pub email: String,
    pub github: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, nominally 0-100. Rendered as given.
    pub level: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
}

/// The embedded portfolio, parsed on first access.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn load() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound)?;
    parse(&file.data)
}

fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))
}
