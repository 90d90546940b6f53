//! Entity kinds and identity

use std::hash::Hash;
use std::hash::Hasher;

use super::Record;
use crate::error::FieldError;

/// An IGDB endpoint, identified by its type tag.
///
/// The tag is what appears in the command path (`game/`, `platform/meta`).
/// Endpoints without a dedicated variant can be reached through
/// [`EntityKind::Other`].
///
/// # Examples
///
/// ```
/// use igdb_lib::model::EntityKind;
///
/// assert_eq!(EntityKind::Game.tag(), "game");
/// assert_eq!("involved_company".parse::<EntityKind>().unwrap(), EntityKind::InvolvedCompany);
/// assert_eq!(EntityKind::other("event").tag(), "event");
/// ```
///
/// Kinds compare and hash by tag, so `Other("game")` equals `Game`.
#[derive(Debug, Clone)]
pub enum EntityKind {
    AgeRating,
    Artwork,
    Character,
    Collection,
    Company,
    Cover,
    Franchise,
    Game,
    GameEngine,
    GameMode,
    Genre,
    InvolvedCompany,
    Keyword,
    Platform,
    PlatformFamily,
    PlayerPerspective,
    ReleaseDate,
    Screenshot,
    Search,
    Theme,
    Website,
    /// Any other endpoint, by tag.
    Other(String),
}

static KNOWN: &[(EntityKind, &str, &str)] = &[
    (EntityKind::AgeRating, "age_rating", "AgeRating"),
    (EntityKind::Artwork, "artwork", "Artwork"),
    (EntityKind::Character, "character", "Character"),
    (EntityKind::Collection, "collection", "Collection"),
    (EntityKind::Company, "company", "Company"),
    (EntityKind::Cover, "cover", "Cover"),
    (EntityKind::Franchise, "franchise", "Franchise"),
    (EntityKind::Game, "game", "Game"),
    (EntityKind::GameEngine, "game_engine", "GameEngine"),
    (EntityKind::GameMode, "game_mode", "GameMode"),
    (EntityKind::Genre, "genre", "Genre"),
    (EntityKind::InvolvedCompany, "involved_company", "InvolvedCompany"),
    (EntityKind::Keyword, "keyword", "Keyword"),
    (EntityKind::Platform, "platform", "Platform"),
    (EntityKind::PlatformFamily, "platform_family", "PlatformFamily"),
    (EntityKind::PlayerPerspective, "player_perspective", "PlayerPerspective"),
    (EntityKind::ReleaseDate, "release_date", "ReleaseDate"),
    (EntityKind::Screenshot, "screenshot", "Screenshot"),
    (EntityKind::Search, "search", "Search"),
    (EntityKind::Theme, "theme", "Theme"),
    (EntityKind::Website, "website", "Website"),
];

impl EntityKind {
    /// Creates a kind for an endpoint by tag, using a known variant when one exists.
    pub fn other(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        KNOWN
            .iter()
            .find(|(_, known, _)| *known == tag)
            .map_or(Self::Other(tag), |(kind, _, _)| kind.clone())
    }

    /// Returns the type tag used in command paths.
    pub fn tag(&self) -> &str {
        match self {
            Self::Other(tag) => tag,
            _ => self.entry().map_or("", |(_, tag, _)| *tag),
        }
    }

    /// Returns the display name used when formatting entities.
    pub fn display_name(&self) -> &str {
        self.entry().map_or(self.tag(), |(_, _, name)| *name)
    }

    fn entry(&self) -> Option<&'static (EntityKind, &'static str, &'static str)> {
        match self {
            Self::Other(tag) => KNOWN.iter().find(|(_, known, _)| *known == tag.as_str()),
            _ => KNOWN
                .iter()
                .find(|(kind, _, _)| std::mem::discriminant(kind) == std::mem::discriminant(self)),
        }
    }
}

impl PartialEq for EntityKind {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }
}

impl Eq for EntityKind {}

impl Hash for EntityKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
    }
}

impl std::str::FromStr for EntityKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::other(s))
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// An identified object of some [`EntityKind`].
///
/// Two objects are equal when both their kind and id match, so a game and a
/// platform that share a numeric id never compare equal. The name takes no
/// part in equality or hashing.
///
/// # Example
///
/// ```
/// use igdb_lib::model::{EntityKind, EntityObject};
///
/// let game = EntityObject::new(EntityKind::Game, 6);
/// let platform = EntityObject::new(EntityKind::Platform, 6);
/// assert_ne!(game, platform);
/// assert_eq!(platform.with_name("PC (Microsoft Windows)").to_string(), "<Platform \"PC (Microsoft Windows)\" (6)>");
/// ```
#[derive(Debug, Clone)]
pub struct EntityObject {
    kind: EntityKind,
    id: u64,
    name: Option<String>,
}

impl EntityObject {
    /// Creates a new object without a display name.
    pub fn new(kind: EntityKind, id: u64) -> Self {
        Self {
            kind,
            id,
            name: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds an object from a response record.
    ///
    /// The record must carry an integer `id`; a string `name` is picked up when present.
    pub fn from_record(kind: EntityKind, record: &Record) -> Result<Self, FieldError> {
        let id = record
            .get_int("id")?
            .ok_or_else(|| FieldError::missing("id"))?;
        let id = u64::try_from(id).map_err(|_| FieldError::invalid_value("id", id))?;

        Ok(Self {
            kind,
            id,
            name: record.name().map(str::to_string),
        })
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the composite identity key.
    pub fn key(&self) -> (&str, u64) {
        (self.kind.tag(), self.id)
    }
}

impl PartialEq for EntityObject {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EntityObject {}

impl Hash for EntityObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for EntityObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind.display_name();
        match &self.name {
            Some(name) => write!(f, "<{} \"{}\" ({})>", kind, name, self.id),
            None => write!(f, "<{} ({})>", kind, self.id),
        }
    }
}
